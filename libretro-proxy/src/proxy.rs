use std::cell::{Cell, RefCell};
use std::ptr;
use std::rc::Rc;
use std::slice;

use libc::{c_char, c_uint, c_void, size_t};
use libretro_sys::{AudioSampleBatchFn, AudioSampleFn, EnvironmentFn, GameInfo, InputPollFn, InputStateFn, SystemAvInfo, SystemInfo, VideoRefreshFn};

use crate::config::Config;
use crate::describe::{self, c_string};
use crate::environment;
use crate::target::{Core, Loader};

macro_rules! address {
    ($callback: expr) => (
        match $callback {
            Some( callback ) => callback as *const c_void,
            None => ptr::null()
        }
    )
}

// Evaluates to the loaded core, or returns `$neutral` from the enclosing
// forwarder when there is none.
macro_rules! target {
    ($proxy: expr, $name: expr) => ( target!( $proxy, $name, () ) );
    ($proxy: expr, $name: expr, $neutral: expr) => (
        match $proxy.target( $name ) {
            Some( core ) => core,
            None => return $neutral
        }
    )
}

/// Forwards the libretro API to a core obtained from a [`Loader`], logging
/// every call on the way.
///
/// The core is loaded lazily by the first forwarded call and released again
/// by [`Proxy::deinit`]; a failed load is retried on the next call. Every
/// method takes `&self` and no borrow of the proxy's state is held while the
/// core runs, so the core is free to call back into [`Proxy::environment`]
/// from within any entry point.
pub struct Proxy< L: Loader > {
    config: Config,
    loader: RefCell< L >,
    core: RefCell< Option< Rc< L::Core > > >,
    environment: Cell< Option< EnvironmentFn > >
}

impl< L: Loader > Proxy< L > {
    pub fn new( config: Config, loader: L ) -> Self {
        Proxy {
            config,
            loader: RefCell::new( loader ),
            core: RefCell::new( None ),
            environment: Cell::new( None )
        }
    }

    pub fn config( &self ) -> &Config {
        &self.config
    }

    /// Whether a core is currently loaded.
    pub fn is_loaded( &self ) -> bool {
        self.core.borrow().is_some()
    }

    /// Loads the core unless it's already loaded.
    ///
    /// Returns `false` if loading failed; the reason is logged.
    pub unsafe fn ensure_initialized( &self ) -> bool {
        if self.is_loaded() {
            return true;
        }

        let result = self.loader.borrow_mut().load( &self.config );
        match result {
            Ok( core ) => {
                *self.core.borrow_mut() = Some( Rc::new( core ) );
                true
            },
            Err( error ) => {
                error!( "{}", error );
                false
            }
        }
    }

    unsafe fn target( &self, name: &str ) -> Option< Rc< L::Core > > {
        if !self.ensure_initialized() {
            error!( "{}: no core is loaded; the call was not forwarded", name );
            return None;
        }

        self.core.borrow().clone()
    }

    fn teardown( &self ) {
        if self.core.borrow_mut().take().is_some() {
            debug!( "Core unloaded" );
        }
    }

    fn dump< I: IntoIterator< Item = String > >( &self, lines: I ) {
        if !self.config.is_verbose() {
            return;
        }

        for line in lines {
            debug!( "    {}", line );
        }
    }

    pub unsafe fn init( &self ) {
        let core = target!( self, "retro_init" );
        core.init();
        info!( "retro_init()" );
    }

    /// Forwards `retro_deinit` and then releases the core.
    ///
    /// The environment callback the frontend registered is kept.
    pub unsafe fn deinit( &self ) {
        let core = target!( self, "retro_deinit" );
        core.deinit();
        info!( "retro_deinit()" );

        drop( core );
        self.teardown();
    }

    pub unsafe fn api_version( &self ) -> c_uint {
        let core = target!( self, "retro_api_version", 0 );
        let result = core.api_version();
        info!( "retro_api_version() = {}", result );
        result
    }

    pub unsafe fn get_system_info( &self, info: *mut SystemInfo ) {
        let core = target!( self, "retro_get_system_info" );
        core.get_system_info( info );
        info!( "retro_get_system_info({:p})", info );
        if !info.is_null() {
            self.dump( describe::system_info( &*info ) );
        }
    }

    pub unsafe fn get_system_av_info( &self, info: *mut SystemAvInfo ) {
        let core = target!( self, "retro_get_system_av_info" );
        core.get_system_av_info( info );
        info!( "retro_get_system_av_info({:p})", info );
        if !info.is_null() {
            self.dump( describe::system_av_info( &*info ) );
        }
    }

    /// Saves the frontend's environment callback and hands `interceptor` to
    /// the core in its place.
    ///
    /// The interceptor is expected to end up in [`Proxy::environment`].
    pub unsafe fn set_environment( &self, callback: Option< EnvironmentFn >, interceptor: EnvironmentFn ) {
        self.environment.set( callback );

        let core = target!( self, "retro_set_environment" );
        core.set_environment( callback.map( |_| interceptor ) );
        info!( "retro_set_environment({:p})", address!( callback ) );
    }

    pub unsafe fn set_video_refresh( &self, callback: Option< VideoRefreshFn > ) {
        let core = target!( self, "retro_set_video_refresh" );
        core.set_video_refresh( callback );
        info!( "retro_set_video_refresh({:p})", address!( callback ) );
    }

    pub unsafe fn set_audio_sample( &self, callback: Option< AudioSampleFn > ) {
        let core = target!( self, "retro_set_audio_sample" );
        core.set_audio_sample( callback );
        info!( "retro_set_audio_sample({:p})", address!( callback ) );
    }

    pub unsafe fn set_audio_sample_batch( &self, callback: Option< AudioSampleBatchFn > ) {
        let core = target!( self, "retro_set_audio_sample_batch" );
        core.set_audio_sample_batch( callback );
        info!( "retro_set_audio_sample_batch({:p})", address!( callback ) );
    }

    pub unsafe fn set_input_poll( &self, callback: Option< InputPollFn > ) {
        let core = target!( self, "retro_set_input_poll" );
        core.set_input_poll( callback );
        info!( "retro_set_input_poll({:p})", address!( callback ) );
    }

    pub unsafe fn set_input_state( &self, callback: Option< InputStateFn > ) {
        let core = target!( self, "retro_set_input_state" );
        core.set_input_state( callback );
        info!( "retro_set_input_state({:p})", address!( callback ) );
    }

    pub unsafe fn set_controller_port_device( &self, port: c_uint, device: c_uint ) {
        let core = target!( self, "retro_set_controller_port_device" );
        core.set_controller_port_device( port, device );
        info!( "retro_set_controller_port_device({}, {})", port, device );
    }

    pub unsafe fn reset( &self ) {
        let core = target!( self, "retro_reset" );
        core.reset();
        info!( "retro_reset()" );
    }

    pub unsafe fn run( &self ) {
        let core = target!( self, "retro_run" );
        core.run();
        info!( "retro_run()" );
    }

    pub unsafe fn serialize_size( &self ) -> size_t {
        let core = target!( self, "retro_serialize_size", 0 );
        let result = core.serialize_size();
        info!( "retro_serialize_size() = {}", result );
        result
    }

    pub unsafe fn serialize( &self, data: *mut c_void, size: size_t ) -> bool {
        let core = target!( self, "retro_serialize", false );
        let result = core.serialize( data, size );
        info!( "retro_serialize({:p}, {}) = {}", data, size, result );
        result
    }

    pub unsafe fn unserialize( &self, data: *const c_void, size: size_t ) -> bool {
        let core = target!( self, "retro_unserialize", false );
        let result = core.unserialize( data, size );
        info!( "retro_unserialize({:p}, {}) = {}", data, size, result );
        result
    }

    pub unsafe fn cheat_reset( &self ) {
        let core = target!( self, "retro_cheat_reset" );
        core.cheat_reset();
        info!( "retro_cheat_reset()" );
    }

    pub unsafe fn cheat_set( &self, index: c_uint, enabled: bool, code: *const c_char ) {
        let core = target!( self, "retro_cheat_set" );
        core.cheat_set( index, enabled, code );
        info!( "retro_cheat_set({}, {}, {})", index, enabled, c_string( code ) );
    }

    pub unsafe fn load_game( &self, game: *const GameInfo ) -> bool {
        let core = target!( self, "retro_load_game", false );
        let result = core.load_game( game );
        info!( "retro_load_game({:p}) = {}", game, result );
        if !game.is_null() {
            self.dump( describe::game_info( &*game ) );
        }

        result
    }

    pub unsafe fn load_game_special( &self, game_type: c_uint, info: *const GameInfo, num_info: size_t ) -> bool {
        let core = target!( self, "retro_load_game_special", false );
        let result = core.load_game_special( game_type, info, num_info );
        info!( "retro_load_game_special({}, {:p}, {}) = {}", game_type, info, num_info, result );
        if !info.is_null() && num_info > 0 {
            let games = slice::from_raw_parts( info, num_info );
            self.dump( games.iter().enumerate().flat_map( |(index, game)| {
                describe::game_info( game ).into_iter().map( move |line| format!( "[{}] {}", index, line ) )
            }));
        }

        result
    }

    pub unsafe fn unload_game( &self ) {
        let core = target!( self, "retro_unload_game" );
        core.unload_game();
        info!( "retro_unload_game()" );
    }

    pub unsafe fn get_region( &self ) -> c_uint {
        let core = target!( self, "retro_get_region", 0 );
        let result = core.get_region();
        info!( "retro_get_region() = {}", result );
        result
    }

    pub unsafe fn get_memory_data( &self, id: c_uint ) -> *mut c_void {
        let core = target!( self, "retro_get_memory_data", ptr::null_mut() );
        let result = core.get_memory_data( id );
        info!( "retro_get_memory_data({}) = {:p}", id, result );
        result
    }

    pub unsafe fn get_memory_size( &self, id: c_uint ) -> size_t {
        let core = target!( self, "retro_get_memory_size", 0 );
        let result = core.get_memory_size( id );
        info!( "retro_get_memory_size({}) = {}", id, result );
        result
    }

    /// Handles an environment call made by the core: passes it on to the
    /// frontend's callback unchanged, logs it and returns the frontend's
    /// answer.
    pub unsafe fn environment( &self, command: c_uint, data: *mut c_void ) -> bool {
        let callback = match self.environment.get() {
            Some( callback ) => callback,
            None => {
                error!( "environment({}) called before the frontend set an environment callback", environment::command_name( command ) );
                return false;
            }
        };

        let result = callback( command, data );
        info!( "{}", environment::describe( command, data, result ) );
        if self.config.is_verbose() {
            self.dump( environment::describe_elements( command, data ) );
        }

        result
    }
}

impl< L: Loader > Drop for Proxy< L > {
    fn drop( &mut self ) {
        self.teardown();
    }
}
