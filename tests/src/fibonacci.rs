mod input;
mod properties;
