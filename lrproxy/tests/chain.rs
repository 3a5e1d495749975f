extern crate libloading;
extern crate libretro_proxy;

use std::env;
use std::path::PathBuf;

use libretro_proxy::{Config, DynamicLoader, Proxy};

// Cargo builds the cdylib next to the test binary's `deps` directory.
fn built_library() -> Option< PathBuf > {
    let exe = env::current_exe().ok()?;
    let deps = exe.parent()?;
    let name = libloading::library_filename( "lrproxy" );
    [ deps.join( &name ), deps.parent()?.join( &name ) ].iter()
        .find( |path| path.exists() )
        .cloned()
}

// Proxies the shim itself, which exports the whole API but has no core of its own behind it.
#[test]
fn shim_can_be_loaded_as_a_core() {
    let path = match built_library() {
        Some( path ) => path,
        None => {
            eprintln!( "lrproxy library not found next to the test binary; skipping" );
            return;
        }
    };

    let proxy = Proxy::new( Config::new( &path ).verbose( false ), DynamicLoader );
    unsafe {
        proxy.init();
        assert!( proxy.is_loaded() );
        assert_eq!( proxy.api_version(), 0 );
        assert_eq!( proxy.serialize_size(), 0 );
        assert!( !proxy.load_game( std::ptr::null() ) );

        proxy.deinit();
        assert!( !proxy.is_loaded() );

        proxy.run();
        assert!( proxy.is_loaded() );
    }
}
