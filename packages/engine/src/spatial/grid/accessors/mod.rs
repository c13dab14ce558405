use super::*;

mod material;
mod temperature;
