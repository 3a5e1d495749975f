#[macro_use]
extern crate libretro_proxy;
extern crate libc;
extern crate libretro_sys;

use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use libc::{c_char, c_uint, c_void};
use libretro_proxy::global::intercept_environment;
use libretro_sys::{Message, ENVIRONMENT_SET_MESSAGE, ENVIRONMENT_SHUTDOWN, MEMORY_SAVE_RAM};

libretro_proxy!( libretro_proxy::Config::new( "/nonexistent/directory/core_libretro.so" ).verbose( false ) );

static HOST_CALLS: AtomicUsize = AtomicUsize::new( 0 );

unsafe extern "C" fn host_environment( command: c_uint, _: *mut c_void ) -> bool {
    HOST_CALLS.fetch_add( 1, Ordering::SeqCst );
    command == ENVIRONMENT_SET_MESSAGE
}

// The exported functions share one process-wide proxy, so everything runs in a single test.
#[test]
fn exported_functions_without_a_core() {
    assert_eq!( retro_api_version(), 0 );
    assert_eq!( retro_serialize_size(), 0 );
    assert_eq!( retro_get_region(), 0 );
    assert_eq!( retro_get_memory_size( MEMORY_SAVE_RAM ), 0 );
    assert!( retro_get_memory_data( MEMORY_SAVE_RAM ).is_null() );
    assert!( !retro_load_game( ptr::null() ) );
    assert!( !retro_serialize( ptr::null_mut(), 0 ) );
    retro_init();
    retro_run();
    retro_deinit();

    retro_set_environment( Some( host_environment ) );

    let mut message = Message { msg: b"Hello\0".as_ptr() as *const c_char, frames: 30 };
    unsafe {
        assert!( intercept_environment( ENVIRONMENT_SET_MESSAGE, &mut message as *mut Message as *mut c_void ) );
        assert!( !intercept_environment( ENVIRONMENT_SHUTDOWN, ptr::null_mut() ) );
    }

    assert_eq!( HOST_CALLS.load( Ordering::SeqCst ), 2 );

    retro_set_environment( None );
    unsafe {
        assert!( !intercept_environment( ENVIRONMENT_SET_MESSAGE, &mut message as *mut Message as *mut c_void ) );
    }

    assert_eq!( HOST_CALLS.load( Ordering::SeqCst ), 2 );
}
