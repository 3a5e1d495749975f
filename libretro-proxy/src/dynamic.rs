use libc::{c_char, c_uint, c_void, size_t};
use libloading::Library;
use libretro_sys::{AudioSampleBatchFn, AudioSampleFn, EnvironmentFn, GameInfo, InputPollFn, InputStateFn, SystemAvInfo, SystemInfo, VideoRefreshFn};

use crate::config::Config;
use crate::error::Error;
use crate::target::{Core, Loader};

unsafe fn resolve< T: Copy >( library: &Library, name: &'static str, verbose: bool ) -> Result< T, Error > {
    if verbose {
        trace!( "Resolving symbol {}", name );
    }

    library.get::< T >( name.as_bytes() )
        .map( |symbol| *symbol )
        .map_err( |source| Error::MissingSymbol { name, source } )
}

macro_rules! symbol_table {
    ($( $field: ident: $symbol: expr => $kind: ty ),+,) => (
        /// Every symbol a target core has to export, in the order they're resolved.
        pub const SYMBOLS: &[&str] = &[ $( $symbol ),+ ];

        struct SymbolTable {
            $( $field: $kind ),+
        }

        impl SymbolTable {
            // Fields are resolved in the order they're written; the first
            // missing symbol aborts the whole table.
            unsafe fn resolve( library: &Library, verbose: bool ) -> Result< SymbolTable, Error > {
                Ok( SymbolTable {
                    $( $field: resolve( library, $symbol, verbose )? ),+
                })
            }
        }
    )
}

symbol_table! {
    init: "retro_init" => unsafe extern "C" fn(),
    deinit: "retro_deinit" => unsafe extern "C" fn(),
    api_version: "retro_api_version" => unsafe extern "C" fn() -> c_uint,
    get_system_info: "retro_get_system_info" => unsafe extern "C" fn( *mut SystemInfo ),
    get_system_av_info: "retro_get_system_av_info" => unsafe extern "C" fn( *mut SystemAvInfo ),
    set_environment: "retro_set_environment" => unsafe extern "C" fn( Option< EnvironmentFn > ),
    set_video_refresh: "retro_set_video_refresh" => unsafe extern "C" fn( Option< VideoRefreshFn > ),
    set_audio_sample: "retro_set_audio_sample" => unsafe extern "C" fn( Option< AudioSampleFn > ),
    set_audio_sample_batch: "retro_set_audio_sample_batch" => unsafe extern "C" fn( Option< AudioSampleBatchFn > ),
    set_input_poll: "retro_set_input_poll" => unsafe extern "C" fn( Option< InputPollFn > ),
    set_input_state: "retro_set_input_state" => unsafe extern "C" fn( Option< InputStateFn > ),
    set_controller_port_device: "retro_set_controller_port_device" => unsafe extern "C" fn( c_uint, c_uint ),
    reset: "retro_reset" => unsafe extern "C" fn(),
    run: "retro_run" => unsafe extern "C" fn(),
    serialize_size: "retro_serialize_size" => unsafe extern "C" fn() -> size_t,
    serialize: "retro_serialize" => unsafe extern "C" fn( *mut c_void, size_t ) -> bool,
    unserialize: "retro_unserialize" => unsafe extern "C" fn( *const c_void, size_t ) -> bool,
    cheat_reset: "retro_cheat_reset" => unsafe extern "C" fn(),
    cheat_set: "retro_cheat_set" => unsafe extern "C" fn( c_uint, bool, *const c_char ),
    load_game: "retro_load_game" => unsafe extern "C" fn( *const GameInfo ) -> bool,
    load_game_special: "retro_load_game_special" => unsafe extern "C" fn( c_uint, *const GameInfo, size_t ) -> bool,
    unload_game: "retro_unload_game" => unsafe extern "C" fn(),
    get_region: "retro_get_region" => unsafe extern "C" fn() -> c_uint,
    get_memory_data: "retro_get_memory_data" => unsafe extern "C" fn( c_uint ) -> *mut c_void,
    get_memory_size: "retro_get_memory_size" => unsafe extern "C" fn( c_uint ) -> size_t,
}

/// A core living in a shared library, with all of its entry points resolved.
///
/// The library stays open for as long as this value lives; dropping it
/// closes the library.
pub struct DynamicCore {
    table: SymbolTable,
    _library: Library
}

impl DynamicCore {
    /// Opens the library at `config.core_path()` and resolves every symbol
    /// in [`SYMBOLS`].
    ///
    /// If any symbol is missing the library is closed again before returning.
    pub unsafe fn open( config: &Config ) -> Result< DynamicCore, Error > {
        let path = config.core_path();
        info!( "Loading core {:?}", path );

        let library = Library::new( path ).map_err( |source| Error::Open { path: path.to_owned(), source } )?;
        let table = SymbolTable::resolve( &library, config.is_verbose() )?;

        Ok( DynamicCore {
            table,
            _library: library
        })
    }
}

impl Core for DynamicCore {
    unsafe fn init( &self ) {
        (self.table.init)()
    }

    unsafe fn deinit( &self ) {
        (self.table.deinit)()
    }

    unsafe fn api_version( &self ) -> c_uint {
        (self.table.api_version)()
    }

    unsafe fn get_system_info( &self, info: *mut SystemInfo ) {
        (self.table.get_system_info)( info )
    }

    unsafe fn get_system_av_info( &self, info: *mut SystemAvInfo ) {
        (self.table.get_system_av_info)( info )
    }

    unsafe fn set_environment( &self, callback: Option< EnvironmentFn > ) {
        (self.table.set_environment)( callback )
    }

    unsafe fn set_video_refresh( &self, callback: Option< VideoRefreshFn > ) {
        (self.table.set_video_refresh)( callback )
    }

    unsafe fn set_audio_sample( &self, callback: Option< AudioSampleFn > ) {
        (self.table.set_audio_sample)( callback )
    }

    unsafe fn set_audio_sample_batch( &self, callback: Option< AudioSampleBatchFn > ) {
        (self.table.set_audio_sample_batch)( callback )
    }

    unsafe fn set_input_poll( &self, callback: Option< InputPollFn > ) {
        (self.table.set_input_poll)( callback )
    }

    unsafe fn set_input_state( &self, callback: Option< InputStateFn > ) {
        (self.table.set_input_state)( callback )
    }

    unsafe fn set_controller_port_device( &self, port: c_uint, device: c_uint ) {
        (self.table.set_controller_port_device)( port, device )
    }

    unsafe fn reset( &self ) {
        (self.table.reset)()
    }

    unsafe fn run( &self ) {
        (self.table.run)()
    }

    unsafe fn serialize_size( &self ) -> size_t {
        (self.table.serialize_size)()
    }

    unsafe fn serialize( &self, data: *mut c_void, size: size_t ) -> bool {
        (self.table.serialize)( data, size )
    }

    unsafe fn unserialize( &self, data: *const c_void, size: size_t ) -> bool {
        (self.table.unserialize)( data, size )
    }

    unsafe fn cheat_reset( &self ) {
        (self.table.cheat_reset)()
    }

    unsafe fn cheat_set( &self, index: c_uint, enabled: bool, code: *const c_char ) {
        (self.table.cheat_set)( index, enabled, code )
    }

    unsafe fn load_game( &self, game: *const GameInfo ) -> bool {
        (self.table.load_game)( game )
    }

    unsafe fn load_game_special( &self, game_type: c_uint, info: *const GameInfo, num_info: size_t ) -> bool {
        (self.table.load_game_special)( game_type, info, num_info )
    }

    unsafe fn unload_game( &self ) {
        (self.table.unload_game)()
    }

    unsafe fn get_region( &self ) -> c_uint {
        (self.table.get_region)()
    }

    unsafe fn get_memory_data( &self, id: c_uint ) -> *mut c_void {
        (self.table.get_memory_data)( id )
    }

    unsafe fn get_memory_size( &self, id: c_uint ) -> size_t {
        (self.table.get_memory_size)( id )
    }
}

/// Loads the core from the path in the proxy's [`Config`].
#[derive(Copy, Clone, Debug, Default)]
pub struct DynamicLoader;

impl Loader for DynamicLoader {
    type Core = DynamicCore;

    unsafe fn load( &mut self, config: &Config ) -> Result< DynamicCore, Error > {
        DynamicCore::open( config )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn symbol_list_covers_the_whole_api() {
        assert_eq!( SYMBOLS.len(), 25 );
        assert_eq!( SYMBOLS[ 0 ], "retro_init" );
        assert_eq!( SYMBOLS[ SYMBOLS.len() - 1 ], "retro_get_memory_size" );

        let unique: HashSet< _ > = SYMBOLS.iter().collect();
        assert_eq!( unique.len(), SYMBOLS.len() );
        assert!( SYMBOLS.iter().all( |name| name.starts_with( "retro_" ) ) );
    }

    #[test]
    fn missing_library_fails_to_open() {
        let config = Config::new( "/nonexistent/directory/missing_libretro.so" );
        match unsafe { DynamicLoader.load( &config ) } {
            Err( Error::Open { path, .. } ) => assert_eq!( path, config.core_path() ),
            Err( error ) => panic!( "unexpected error: {}", error ),
            Ok( _ ) => panic!( "a missing library was loaded" )
        }
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn library_without_libretro_symbols_is_rejected_at_the_first_symbol() {
        let config = Config::new( "libc.so.6" ).verbose( false );
        match unsafe { DynamicCore::open( &config ) } {
            Err( Error::MissingSymbol { name, .. } ) => assert_eq!( name, "retro_init" ),
            Err( error ) => panic!( "unexpected error: {}", error ),
            Ok( _ ) => panic!( "libc was accepted as a libretro core" )
        }
    }
}
