#[macro_use]
extern crate libretro_proxy;

use libretro_proxy::Config;

// Fixed at build time; set `LRPROXY_CORE_PATH` when building to proxy another core.
const CORE_PATH: &str = match option_env!( "LRPROXY_CORE_PATH" ) {
    Some( path ) => path,
    None => "./core_libretro.so"
};

libretro_proxy!( Config::new( CORE_PATH ) );
