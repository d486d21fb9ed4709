//! IO module - configuration file handling.

mod config;

pub use config::{
    parse_configuration, read_configuration, Configuration, Evaluation, WavefunctionConfig,
};
