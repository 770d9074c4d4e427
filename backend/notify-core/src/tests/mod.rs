mod composer;
mod scanner;
