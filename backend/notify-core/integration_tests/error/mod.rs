mod delivery;
mod scan;
