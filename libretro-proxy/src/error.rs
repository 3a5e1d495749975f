use std::path::PathBuf;

use thiserror::Error;

/// Reasons the target core could not be made available.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to load core {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: libloading::Error
    },

    #[error("couldn't find symbol `{name}` in the core: {source}")]
    MissingSymbol {
        name: &'static str,
        source: libloading::Error
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::path::PathBuf;

    #[test]
    fn messages_name_the_culprit() {
        let error = Error::Open { path: PathBuf::from( "/cores/missing.so" ), source: libloading::Error::DlOpenUnknown };
        assert!( error.to_string().contains( "/cores/missing.so" ) );

        let error = Error::MissingSymbol { name: "retro_run", source: libloading::Error::DlSymUnknown };
        assert!( error.to_string().contains( "`retro_run`" ) );
    }
}
