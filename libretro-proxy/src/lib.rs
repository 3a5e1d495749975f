//! A libretro core that doesn't emulate anything itself.
//!
//! On first use it opens another libretro core, resolves its entry points and
//! from then on forwards every call to it, writing a trace of each call, its
//! arguments and its result to stderr. The environment callback handed to the
//! core is replaced by an interceptor which decodes the environment commands
//! the core sends back to the frontend.
//!
//! A proxy library is built by invoking [`libretro_proxy!`] once from a
//! `cdylib` crate:
//!
//! ```ignore
//! #[macro_use]
//! extern crate libretro_proxy;
//!
//! libretro_proxy!( libretro_proxy::Config::new( "/usr/lib/libretro/nestopia_libretro.so" ) );
//! ```

pub extern crate libc;
pub extern crate libretro_sys;
extern crate libloading;
extern crate env_logger;
extern crate thiserror;

#[macro_use]
extern crate log;

mod config;
mod describe;
mod devices;
mod dynamic;
mod environment;
mod error;
mod proxy;
mod target;

pub mod global;
pub mod logger;

pub use config::Config;
pub use devices::{describe_device, describe_device_id, describe_device_index, device_id_name, device_index_name, device_type_name};
pub use dynamic::{DynamicCore, DynamicLoader, SYMBOLS};
pub use environment::{Command, Payload, COMMANDS, command_name, lookup_command};
pub use error::Error;
pub use proxy::Proxy;
pub use target::{Core, Loader};

/// Exports the whole libretro API from the invoking crate, forwarding every
/// entry point to the core described by `$config`.
///
/// `$config` is evaluated once, on the first call of any entry point.
#[macro_export]
macro_rules! libretro_proxy {
    ($config: expr) => (
        fn libretro_proxy_config() -> $crate::Config {
            $config
        }

        fn libretro_proxy_instance() -> &'static $crate::Proxy< $crate::DynamicLoader > {
            $crate::global::instance( libretro_proxy_config )
        }

        #[no_mangle]
        pub extern "C" fn retro_init() {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().init() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_deinit() {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().deinit() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_api_version() -> $crate::libc::c_uint {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().api_version() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_get_system_info( info: *mut $crate::libretro_sys::SystemInfo ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().get_system_info( info ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_get_system_av_info( info: *mut $crate::libretro_sys::SystemAvInfo ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().get_system_av_info( info ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_set_environment( callback: Option< $crate::libretro_sys::EnvironmentFn > ) {
            $crate::global::abort_on_panic( || unsafe {
                libretro_proxy_instance().set_environment( callback, $crate::global::intercept_environment )
            })
        }

        #[no_mangle]
        pub extern "C" fn retro_set_video_refresh( callback: Option< $crate::libretro_sys::VideoRefreshFn > ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().set_video_refresh( callback ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_set_audio_sample( callback: Option< $crate::libretro_sys::AudioSampleFn > ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().set_audio_sample( callback ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_set_audio_sample_batch( callback: Option< $crate::libretro_sys::AudioSampleBatchFn > ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().set_audio_sample_batch( callback ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_set_input_poll( callback: Option< $crate::libretro_sys::InputPollFn > ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().set_input_poll( callback ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_set_input_state( callback: Option< $crate::libretro_sys::InputStateFn > ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().set_input_state( callback ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_set_controller_port_device( port: $crate::libc::c_uint, device: $crate::libc::c_uint ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().set_controller_port_device( port, device ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_reset() {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().reset() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_run() {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().run() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_serialize_size() -> $crate::libc::size_t {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().serialize_size() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_serialize( data: *mut $crate::libc::c_void, size: $crate::libc::size_t ) -> bool {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().serialize( data, size ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_unserialize( data: *const $crate::libc::c_void, size: $crate::libc::size_t ) -> bool {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().unserialize( data, size ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_cheat_reset() {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().cheat_reset() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_cheat_set( index: $crate::libc::c_uint, enabled: bool, code: *const $crate::libc::c_char ) {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().cheat_set( index, enabled, code ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_load_game( game: *const $crate::libretro_sys::GameInfo ) -> bool {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().load_game( game ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_load_game_special(
            game_type: $crate::libc::c_uint,
            info: *const $crate::libretro_sys::GameInfo,
            num_info: $crate::libc::size_t
        ) -> bool {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().load_game_special( game_type, info, num_info ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_unload_game() {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().unload_game() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_get_region() -> $crate::libc::c_uint {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().get_region() } )
        }

        #[no_mangle]
        pub extern "C" fn retro_get_memory_data( id: $crate::libc::c_uint ) -> *mut $crate::libc::c_void {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().get_memory_data( id ) } )
        }

        #[no_mangle]
        pub extern "C" fn retro_get_memory_size( id: $crate::libc::c_uint ) -> $crate::libc::size_t {
            $crate::global::abort_on_panic( || unsafe { libretro_proxy_instance().get_memory_size( id ) } )
        }
    )
}
