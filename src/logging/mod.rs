//=========================================================================
// Logging
//=========================================================================
//
// The runtime itself only talks to the `log` facade. This module offers a
// ready-made `env_logger` backend for binaries and demos.
//
//=========================================================================

mod init;

pub use init::{init_logging, LoggingConfig};
