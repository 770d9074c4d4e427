mod interfaces;
mod public;
