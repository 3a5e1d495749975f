use libc::{c_char, c_uint, c_void, size_t};
use libretro_sys::{AudioSampleBatchFn, AudioSampleFn, EnvironmentFn, GameInfo, InputPollFn, InputStateFn, SystemAvInfo, SystemInfo, VideoRefreshFn};

use crate::config::Config;
use crate::error::Error;

/// The libretro API as seen from the frontend's side: one method per entry
/// point a core exports, with the exact argument and return types of the C
/// functions.
///
/// All of these are `unsafe` for the same reason the C functions are; the
/// caller vouches for every pointer and for calling them in the order the
/// libretro API prescribes.
pub trait Core {
    unsafe fn init( &self );
    unsafe fn deinit( &self );
    unsafe fn api_version( &self ) -> c_uint;
    unsafe fn get_system_info( &self, info: *mut SystemInfo );
    unsafe fn get_system_av_info( &self, info: *mut SystemAvInfo );
    unsafe fn set_environment( &self, callback: Option< EnvironmentFn > );
    unsafe fn set_video_refresh( &self, callback: Option< VideoRefreshFn > );
    unsafe fn set_audio_sample( &self, callback: Option< AudioSampleFn > );
    unsafe fn set_audio_sample_batch( &self, callback: Option< AudioSampleBatchFn > );
    unsafe fn set_input_poll( &self, callback: Option< InputPollFn > );
    unsafe fn set_input_state( &self, callback: Option< InputStateFn > );
    unsafe fn set_controller_port_device( &self, port: c_uint, device: c_uint );
    unsafe fn reset( &self );
    unsafe fn run( &self );
    unsafe fn serialize_size( &self ) -> size_t;
    unsafe fn serialize( &self, data: *mut c_void, size: size_t ) -> bool;
    unsafe fn unserialize( &self, data: *const c_void, size: size_t ) -> bool;
    unsafe fn cheat_reset( &self );
    unsafe fn cheat_set( &self, index: c_uint, enabled: bool, code: *const c_char );
    unsafe fn load_game( &self, game: *const GameInfo ) -> bool;
    unsafe fn load_game_special( &self, game_type: c_uint, info: *const GameInfo, num_info: size_t ) -> bool;
    unsafe fn unload_game( &self );
    unsafe fn get_region( &self ) -> c_uint;
    unsafe fn get_memory_data( &self, id: c_uint ) -> *mut c_void;
    unsafe fn get_memory_size( &self, id: c_uint ) -> size_t;
}

/// Produces the core a proxy forwards to.
pub trait Loader {
    type Core: Core;

    /// Makes a fully usable core available, or fails without leaving
    /// anything half-initialized behind.
    ///
    /// Unsafe since loading a core may run arbitrary initialization code.
    unsafe fn load( &mut self, config: &Config ) -> Result< Self::Core, Error >;
}
