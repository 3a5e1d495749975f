use std::path::{Path, PathBuf};

/// Settings fixed when the proxy library is built.
#[derive(Clone, Debug)]
pub struct Config {
    core_path: PathBuf,
    verbose: bool
}

impl Config {
    /// A proxy for the core at `core_path`.
    ///
    /// Verbose logging defaults to on when the `verbose` feature is enabled.
    pub fn new< P: AsRef< Path > >( core_path: P ) -> Config {
        Config {
            core_path: core_path.as_ref().to_owned(),
            verbose: cfg!( feature = "verbose" )
        }
    }

    /// Enables or disables the per-field structure dumps and the symbol
    /// resolution trace.
    pub fn verbose( mut self, verbose: bool ) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn core_path( &self ) -> &Path {
        &self.core_path
    }

    pub fn is_verbose( &self ) -> bool {
        self.verbose
    }
}
