use std::ffi::CStr;

use libc::c_char;
use libretro_sys::{GameGeometry, GameInfo, SystemAvInfo, SystemInfo};

/// A C string as a quoted literal, or `NULL`.
pub unsafe fn c_string( pointer: *const c_char ) -> String {
    if pointer.is_null() {
        return "NULL".to_owned();
    }

    format!( "{:?}", CStr::from_ptr( pointer ).to_string_lossy() )
}

pub unsafe fn system_info( info: &SystemInfo ) -> Vec< String > {
    vec![
        format!( "library_name: {}", c_string( info.library_name ) ),
        format!( "library_version: {}", c_string( info.library_version ) ),
        format!( "valid_extensions: {}", c_string( info.valid_extensions ) ),
        format!( "need_fullpath: {}", info.need_fullpath ),
        format!( "block_extract: {}", info.block_extract )
    ]
}

pub fn game_geometry( geometry: &GameGeometry ) -> Vec< String > {
    vec![
        format!( "base_width: {}", geometry.base_width ),
        format!( "base_height: {}", geometry.base_height ),
        format!( "max_width: {}", geometry.max_width ),
        format!( "max_height: {}", geometry.max_height ),
        format!( "aspect_ratio: {}", geometry.aspect_ratio )
    ]
}

pub fn system_av_info( info: &SystemAvInfo ) -> Vec< String > {
    let mut lines = game_geometry( &info.geometry );
    lines.push( format!( "fps: {}", info.timing.fps ) );
    lines.push( format!( "sample_rate: {}", info.timing.sample_rate ) );
    lines
}

pub unsafe fn game_info( game: &GameInfo ) -> Vec< String > {
    vec![
        format!( "path: {}", c_string( game.path ) ),
        format!( "data: {:p}", game.data ),
        format!( "size: {}", game.size ),
        format!( "meta: {}", c_string( game.meta ) )
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn c_strings_are_quoted() {
        unsafe {
            assert_eq!( c_string( ptr::null() ), "NULL" );
            assert_eq!( c_string( b"nes|fds\0".as_ptr() as *const c_char ), "\"nes|fds\"" );
            assert_eq!( c_string( b"say \"hi\"\0".as_ptr() as *const c_char ), "\"say \\\"hi\\\"\"" );
        }
    }

    #[test]
    fn game_info_has_one_line_per_field() {
        let data = [1u8, 2, 3];
        let game = GameInfo {
            path: b"/roms/game.nes\0".as_ptr() as *const c_char,
            data: data.as_ptr() as *const _,
            size: data.len(),
            meta: ptr::null()
        };

        let lines = unsafe { game_info( &game ) };
        assert_eq!( lines, vec![
            "path: \"/roms/game.nes\"".to_owned(),
            format!( "data: {:p}", data.as_ptr() ),
            "size: 3".to_owned(),
            "meta: NULL".to_owned()
        ]);
    }

    #[test]
    fn av_info_includes_timing() {
        let info = SystemAvInfo {
            geometry: GameGeometry {
                base_width: 256,
                base_height: 240,
                max_width: 256,
                max_height: 240,
                aspect_ratio: 0.0
            },
            timing: libretro_sys::SystemTiming {
                fps: 60.0,
                sample_rate: 44100.0
            }
        };

        let lines = system_av_info( &info );
        assert_eq!( lines.len(), 7 );
        assert_eq!( lines[ 0 ], "base_width: 256" );
        assert_eq!( lines[ 5 ], "fps: 60" );
        assert_eq!( lines[ 6 ], "sample_rate: 44100" );
    }
}
