//! The process-wide proxy behind the exported `retro_*` functions.
//!
//! These are only public so that [`libretro_proxy!`](crate::libretro_proxy)
//! can reach them from the crate it's invoked in.

use std::panic::{self, AssertUnwindSafe};
use std::process;
use std::ptr;

use libc::{c_uint, c_void};

use crate::config::Config;
use crate::dynamic::DynamicLoader;
use crate::logger;
use crate::proxy::Proxy;

static mut INSTANCE: *mut Proxy< DynamicLoader > = 0 as *mut Proxy< DynamicLoader >;

/// Returns the proxy, creating it with `config` on the first call.
///
/// The libretro API is single threaded, which is what makes handing out
/// a `'static` reference here sound.
#[doc(hidden)]
pub fn instance( config: fn() -> Config ) -> &'static Proxy< DynamicLoader > {
    unsafe {
        if INSTANCE == ptr::null_mut() {
            logger::initialize();
            INSTANCE = Box::into_raw( Box::new( Proxy::new( config(), DynamicLoader ) ) );
        }

        &*INSTANCE
    }
}

/// The environment callback the core gets instead of the frontend's.
#[doc(hidden)]
pub unsafe extern "C" fn intercept_environment( command: c_uint, data: *mut c_void ) -> bool {
    abort_on_panic( || {
        match INSTANCE.as_ref() {
            Some( proxy ) => proxy.environment( command, data ),
            None => {
                error!( "environment({}) called before any entry point of the proxy", command );
                false
            }
        }
    })
}

/// Runs `callback`, aborting the process if it panics instead of unwinding
/// into the caller.
#[doc(hidden)]
pub fn abort_on_panic< R, F: FnOnce() -> R >( callback: F ) -> R {
    match panic::catch_unwind( AssertUnwindSafe( callback ) ) {
        Ok( value ) => value,
        Err( _ ) => {
            error!( "Panic inside of the proxy; aborting" );
            process::abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_on_panic_passes_the_result_through() {
        assert_eq!( abort_on_panic( || 42 ), 42 );
    }

    #[test]
    fn environment_before_the_instance_exists_is_refused() {
        assert!( !unsafe { intercept_environment( libretro_sys::ENVIRONMENT_GET_CAN_DUPE, ptr::null_mut() ) } );
    }
}
