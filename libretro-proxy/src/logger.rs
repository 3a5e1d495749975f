//! The stderr logger the proxy installs for itself.

use std::io::Write;

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const FILTER_ENV: &str = "LRPROXY_LOG";

const DEFAULT_FILTER: &str = "trace";

/// Installs a logger writing one line per record to stderr.
///
/// Does nothing if the host process has already installed a logger of its own.
pub fn initialize() {
    let result = Builder::from_env( Env::default().filter_or( FILTER_ENV, DEFAULT_FILTER ) )
        .target( Target::Stderr )
        .format( |formatter, record| {
            writeln!( formatter, "[lrproxy] {:<5} {}", record.level(), record.args() )
        })
        .try_init();

    if result.is_err() {
        debug!( "A logger is already installed; the proxy's own logger is unused" );
    }
}
