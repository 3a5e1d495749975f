//! Decoding of the environment calls a core makes to its frontend.
//!
//! Every command the libretro API defines has an entry in [`COMMANDS`], which
//! pairs its code with its symbolic name and with the shape of the payload the
//! `data` pointer refers to. Payloads the core hands over (the `SET_*`
//! commands) are always decoded; payloads the frontend fills in are only read
//! when the frontend reported success, since they're left untouched otherwise.

use libc::{c_char, c_int, c_uint, c_void};
use libretro_sys::*;

use crate::describe::{self, c_string};
use crate::devices::{describe_device, describe_device_id, describe_device_index};

/// What the `data` argument of an environment command points to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Payload {
    /// Nothing worth showing.
    None,
    /// An interface or callback structure, shown as an address.
    Opaque,
    /// `const bool *` set by the core.
    InBool,
    /// `bool *` filled in by the frontend.
    OutBool,
    /// `const unsigned *` set by the core.
    InUnsigned,
    /// `unsigned *` filled in by the frontend.
    OutUnsigned,
    /// `int *` filled in by the frontend.
    OutInt,
    /// `uint64_t *` set by the core.
    InU64,
    /// `uint64_t *` filled in by the frontend.
    OutU64,
    /// `float *` filled in by the frontend.
    OutFloat,
    /// `const char **` filled in by the frontend.
    OutString,
    /// `const struct retro_message *`.
    Message,
    /// `const struct retro_message_ext *`.
    MessageExt,
    /// `const enum retro_pixel_format *`.
    PixelFormat,
    /// `unsigned *` holding a `enum retro_language`.
    Language,
    /// `const struct retro_input_descriptor *`, terminated by a null description.
    InputDescriptors,
    /// `struct retro_variable *` with a key from the core and a value from the frontend.
    GetVariable,
    /// `const struct retro_variable *` set by the core.
    SetVariable,
    /// `const struct retro_variable *`, terminated by a null key.
    Variables,
    /// `const struct retro_game_geometry *`.
    Geometry,
    /// `const struct retro_system_av_info *`.
    AvInfo
}

/// One environment command of the libretro API.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Command {
    pub code: c_uint,
    pub name: &'static str,
    pub payload: Payload
}

macro_rules! commands {
    ($( $code: expr => $name: expr, $payload: ident; )+) => (
        &[ $( Command { code: $code, name: $name, payload: Payload::$payload } ),+ ]
    )
}

/// Every environment command known to the decoder.
pub static COMMANDS: &[Command] = commands! {
    ENVIRONMENT_SET_ROTATION => "RETRO_ENVIRONMENT_SET_ROTATION", InUnsigned;
    ENVIRONMENT_GET_OVERSCAN => "RETRO_ENVIRONMENT_GET_OVERSCAN", OutBool;
    ENVIRONMENT_GET_CAN_DUPE => "RETRO_ENVIRONMENT_GET_CAN_DUPE", OutBool;
    ENVIRONMENT_SET_MESSAGE => "RETRO_ENVIRONMENT_SET_MESSAGE", Message;
    ENVIRONMENT_SHUTDOWN => "RETRO_ENVIRONMENT_SHUTDOWN", None;
    ENVIRONMENT_SET_PERFORMANCE_LEVEL => "RETRO_ENVIRONMENT_SET_PERFORMANCE_LEVEL", InUnsigned;
    ENVIRONMENT_GET_SYSTEM_DIRECTORY => "RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY", OutString;
    ENVIRONMENT_SET_PIXEL_FORMAT => "RETRO_ENVIRONMENT_SET_PIXEL_FORMAT", PixelFormat;
    ENVIRONMENT_SET_INPUT_DESCRIPTORS => "RETRO_ENVIRONMENT_SET_INPUT_DESCRIPTORS", InputDescriptors;
    ENVIRONMENT_SET_KEYBOARD_CALLBACK => "RETRO_ENVIRONMENT_SET_KEYBOARD_CALLBACK", Opaque;
    ENVIRONMENT_SET_DISK_CONTROL_INTERFACE => "RETRO_ENVIRONMENT_SET_DISK_CONTROL_INTERFACE", Opaque;
    ENVIRONMENT_SET_HW_RENDER => "RETRO_ENVIRONMENT_SET_HW_RENDER", Opaque;
    ENVIRONMENT_GET_VARIABLE => "RETRO_ENVIRONMENT_GET_VARIABLE", GetVariable;
    ENVIRONMENT_SET_VARIABLES => "RETRO_ENVIRONMENT_SET_VARIABLES", Variables;
    ENVIRONMENT_GET_VARIABLE_UPDATE => "RETRO_ENVIRONMENT_GET_VARIABLE_UPDATE", OutBool;
    ENVIRONMENT_SET_SUPPORT_NO_GAME => "RETRO_ENVIRONMENT_SET_SUPPORT_NO_GAME", InBool;
    ENVIRONMENT_GET_LIBRETRO_PATH => "RETRO_ENVIRONMENT_GET_LIBRETRO_PATH", OutString;
    ENVIRONMENT_SET_FRAME_TIME_CALLBACK => "RETRO_ENVIRONMENT_SET_FRAME_TIME_CALLBACK", Opaque;
    ENVIRONMENT_SET_AUDIO_CALLBACK => "RETRO_ENVIRONMENT_SET_AUDIO_CALLBACK", Opaque;
    ENVIRONMENT_GET_RUMBLE_INTERFACE => "RETRO_ENVIRONMENT_GET_RUMBLE_INTERFACE", Opaque;
    ENVIRONMENT_GET_INPUT_DEVICE_CAPABILITIES => "RETRO_ENVIRONMENT_GET_INPUT_DEVICE_CAPABILITIES", OutU64;
    ENVIRONMENT_GET_SENSOR_INTERFACE => "RETRO_ENVIRONMENT_GET_SENSOR_INTERFACE", Opaque;
    ENVIRONMENT_GET_CAMERA_INTERFACE => "RETRO_ENVIRONMENT_GET_CAMERA_INTERFACE", Opaque;
    ENVIRONMENT_GET_LOG_INTERFACE => "RETRO_ENVIRONMENT_GET_LOG_INTERFACE", Opaque;
    ENVIRONMENT_GET_PERF_INTERFACE => "RETRO_ENVIRONMENT_GET_PERF_INTERFACE", Opaque;
    ENVIRONMENT_GET_LOCATION_INTERFACE => "RETRO_ENVIRONMENT_GET_LOCATION_INTERFACE", Opaque;
    ENVIRONMENT_GET_CORE_ASSETS_DIRECTORY => "RETRO_ENVIRONMENT_GET_CORE_ASSETS_DIRECTORY", OutString;
    ENVIRONMENT_GET_SAVE_DIRECTORY => "RETRO_ENVIRONMENT_GET_SAVE_DIRECTORY", OutString;
    ENVIRONMENT_SET_SYSTEM_AV_INFO => "RETRO_ENVIRONMENT_SET_SYSTEM_AV_INFO", AvInfo;
    ENVIRONMENT_SET_PROC_ADDRESS_CALLBACK => "RETRO_ENVIRONMENT_SET_PROC_ADDRESS_CALLBACK", Opaque;
    ENVIRONMENT_SET_SUBSYSTEM_INFO => "RETRO_ENVIRONMENT_SET_SUBSYSTEM_INFO", Opaque;
    ENVIRONMENT_SET_CONTROLLER_INFO => "RETRO_ENVIRONMENT_SET_CONTROLLER_INFO", Opaque;
    ENVIRONMENT_SET_MEMORY_MAPS => "RETRO_ENVIRONMENT_SET_MEMORY_MAPS", Opaque;
    ENVIRONMENT_SET_GEOMETRY => "RETRO_ENVIRONMENT_SET_GEOMETRY", Geometry;
    ENVIRONMENT_GET_USERNAME => "RETRO_ENVIRONMENT_GET_USERNAME", OutString;
    ENVIRONMENT_GET_LANGUAGE => "RETRO_ENVIRONMENT_GET_LANGUAGE", Language;
    ENVIRONMENT_GET_CURRENT_SOFTWARE_FRAMEBUFFER => "RETRO_ENVIRONMENT_GET_CURRENT_SOFTWARE_FRAMEBUFFER", Opaque;
    ENVIRONMENT_GET_HW_RENDER_INTERFACE => "RETRO_ENVIRONMENT_GET_HW_RENDER_INTERFACE", Opaque;

    // Newer than libretro-sys.
    42 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_SET_SUPPORT_ACHIEVEMENTS", InBool;
    43 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_SET_HW_RENDER_CONTEXT_NEGOTIATION_INTERFACE", Opaque;
    44 => "RETRO_ENVIRONMENT_SET_SERIALIZATION_QUIRKS", InU64;
    44 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_SET_HW_SHARED_CONTEXT", None;
    45 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_VFS_INTERFACE", Opaque;
    46 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_LED_INTERFACE", Opaque;
    47 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_AUDIO_VIDEO_ENABLE", OutInt;
    48 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_MIDI_INTERFACE", Opaque;
    49 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_FASTFORWARDING", OutBool;
    50 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_TARGET_REFRESH_RATE", OutFloat;
    51 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_INPUT_BITMASKS", None;
    52 => "RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION", OutUnsigned;
    53 => "RETRO_ENVIRONMENT_SET_CORE_OPTIONS", Opaque;
    54 => "RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL", Opaque;
    55 => "RETRO_ENVIRONMENT_SET_CORE_OPTIONS_DISPLAY", Opaque;
    56 => "RETRO_ENVIRONMENT_GET_PREFERRED_HW_RENDER", OutUnsigned;
    57 => "RETRO_ENVIRONMENT_GET_DISK_CONTROL_INTERFACE_VERSION", OutUnsigned;
    58 => "RETRO_ENVIRONMENT_SET_DISK_CONTROL_EXT_INTERFACE", Opaque;
    59 => "RETRO_ENVIRONMENT_GET_MESSAGE_INTERFACE_VERSION", OutUnsigned;
    60 => "RETRO_ENVIRONMENT_SET_MESSAGE_EXT", MessageExt;
    61 => "RETRO_ENVIRONMENT_GET_INPUT_MAX_USERS", OutUnsigned;
    62 => "RETRO_ENVIRONMENT_SET_AUDIO_BUFFER_STATUS_CALLBACK", Opaque;
    63 => "RETRO_ENVIRONMENT_SET_MINIMUM_AUDIO_LATENCY", InUnsigned;
    64 => "RETRO_ENVIRONMENT_SET_FASTFORWARDING_OVERRIDE", Opaque;
    65 => "RETRO_ENVIRONMENT_SET_CONTENT_INFO_OVERRIDE", Opaque;
    66 => "RETRO_ENVIRONMENT_GET_GAME_INFO_EXT", Opaque;
    67 => "RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2", Opaque;
    68 => "RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL", Opaque;
    69 => "RETRO_ENVIRONMENT_SET_CORE_OPTIONS_UPDATE_DISPLAY_CALLBACK", Opaque;
    70 => "RETRO_ENVIRONMENT_SET_VARIABLE", SetVariable;
    71 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_THROTTLE_STATE", Opaque;
    72 | ENVIRONMENT_EXPERIMENTAL => "RETRO_ENVIRONMENT_GET_SAVESTATE_CONTEXT", OutInt;
};

/// Looks up an environment command by its code.
pub fn lookup_command( code: c_uint ) -> Option< &'static Command > {
    COMMANDS.iter().find( |command| command.code == code )
}

/// The symbolic name of a command, or its raw code if it isn't known.
pub fn command_name( code: c_uint ) -> String {
    match lookup_command( code ) {
        Some( command ) => command.name.to_owned(),
        None => code.to_string()
    }
}

// `struct retro_message_ext`, which libretro-sys predates.
#[repr(C)]
struct MessageExt {
    msg: *const c_char,
    duration: c_uint,
    priority: c_uint,
    level: c_int,
    target: c_int,
    kind: c_int,
    progress: i8
}

impl Payload {
    /// Whether the frontend is the one writing the payload.
    pub fn is_output( self ) -> bool {
        match self {
            Payload::OutBool | Payload::OutUnsigned | Payload::OutInt | Payload::OutU64 |
            Payload::OutFloat | Payload::OutString | Payload::Language => true,
            _ => false
        }
    }
}

unsafe fn decode( payload: Payload, data: *mut c_void, result: bool ) -> String {
    match payload {
        Payload::None | Payload::Opaque => {},
        _ if data.is_null() => return ", NULL".to_owned(),
        _ if payload.is_output() && !result => return format!( ", {:p}", data ),
        _ => {}
    }

    match payload {
        Payload::None => String::new(),
        Payload::Opaque => format!( ", {:p}", data ),
        Payload::InBool | Payload::OutBool => format!( ", {}", *(data as *const bool) ),
        Payload::InUnsigned | Payload::OutUnsigned => format!( ", {}", *(data as *const c_uint) ),
        Payload::OutInt => format!( ", {}", *(data as *const c_int) ),
        Payload::InU64 | Payload::OutU64 => format!( ", 0x{:x}", *(data as *const u64) ),
        Payload::OutFloat => format!( ", {}", *(data as *const f32) ),
        Payload::OutString => format!( ", {}", c_string( *(data as *const *const c_char) ) ),
        Payload::Message => {
            let message = &*(data as *const Message);
            format!( ", msg={}, frames={}", c_string( message.msg ), message.frames )
        },
        Payload::MessageExt => {
            let message = &*(data as *const MessageExt);
            format!( ", msg={}, duration={}, priority={}, level={}, target={}, type={}, progress={}",
                c_string( message.msg ), message.duration, message.priority,
                message.level, message.target, message.kind, message.progress )
        },
        Payload::PixelFormat => {
            let value = *(data as *const c_uint);
            match PixelFormat::from_uint( value ) {
                Some( format ) => format!( ", {:?}", format ),
                None => format!( ", {}", value )
            }
        },
        Payload::Language => {
            let value = *(data as *const c_uint);
            match Language::from_uint( value ) {
                Some( language ) => format!( ", {:?}", language ),
                None => format!( ", {}", value )
            }
        },
        Payload::InputDescriptors => format!( ", {} descriptors", input_descriptors( data ).len() ),
        Payload::GetVariable => {
            let variable = &*(data as *const Variable);
            if result {
                format!( ", key={}, value={}", c_string( variable.key ), c_string( variable.value ) )
            } else {
                format!( ", key={}", c_string( variable.key ) )
            }
        },
        Payload::SetVariable => {
            let variable = &*(data as *const Variable);
            format!( ", key={}, value={}", c_string( variable.key ), c_string( variable.value ) )
        },
        Payload::Variables => format!( ", {} variables", variables( data ).len() ),
        Payload::Geometry => format!( ", {}", describe::game_geometry( &*(data as *const GameGeometry) ).join( ", " ) ),
        Payload::AvInfo => format!( ", {}", describe::system_av_info( &*(data as *const SystemAvInfo) ).join( ", " ) )
    }
}

unsafe fn input_descriptors< 'a >( data: *mut c_void ) -> Vec< &'a InputDescriptor > {
    let mut output = Vec::new();
    let mut descriptor = data as *const InputDescriptor;
    while !(*descriptor).description.is_null() {
        output.push( &*descriptor );
        descriptor = descriptor.offset( 1 );
    }

    output
}

unsafe fn variables< 'a >( data: *mut c_void ) -> Vec< &'a Variable > {
    let mut output = Vec::new();
    let mut variable = data as *const Variable;
    while !(*variable).key.is_null() {
        output.push( &*variable );
        variable = variable.offset( 1 );
    }

    output
}

/// One line describing an environment call and its result.
///
/// Unknown commands only show the raw code and pointer.
pub unsafe fn describe( code: c_uint, data: *mut c_void, result: bool ) -> String {
    match lookup_command( code ) {
        Some( command ) => format!( "environment({}{}) = {}", command.name, decode( command.payload, data, result ), result ),
        None => format!( "environment({}, {:p}) = {}", code, data, result )
    }
}

/// One line per element for the commands whose payload is an array.
pub unsafe fn describe_elements( code: c_uint, data: *mut c_void ) -> Vec< String > {
    let payload = match lookup_command( code ) {
        Some( command ) => command.payload,
        None => return Vec::new()
    };

    if data.is_null() {
        return Vec::new();
    }

    match payload {
        Payload::InputDescriptors => {
            input_descriptors( data ).into_iter().enumerate().map( |(index, descriptor)| {
                format!( "[{}] port={} device={} index={} id={} description={}",
                    index,
                    descriptor.port,
                    describe_device( descriptor.device ),
                    describe_device_index( descriptor.device, descriptor.index ),
                    describe_device_id( descriptor.device, descriptor.id ),
                    c_string( descriptor.description )
                )
            }).collect()
        },
        Payload::Variables => {
            variables( data ).into_iter().enumerate().map( |(index, variable)| {
                format!( "[{}] key={} value={}", index, c_string( variable.key ), c_string( variable.value ) )
            }).collect()
        },
        _ => Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::ptr;

    fn as_data< T >( value: &mut T ) -> *mut c_void {
        value as *mut T as *mut c_void
    }

    #[test]
    fn codes_and_names_are_unique() {
        let codes: HashSet< _ > = COMMANDS.iter().map( |command| command.code ).collect();
        let names: HashSet< _ > = COMMANDS.iter().map( |command| command.name ).collect();
        assert_eq!( codes.len(), COMMANDS.len() );
        assert_eq!( names.len(), COMMANDS.len() );
        assert!( COMMANDS.len() >= 50 );
    }

    #[test]
    fn experimental_bit_is_part_of_the_code() {
        assert_eq!( command_name( 44 ), "RETRO_ENVIRONMENT_SET_SERIALIZATION_QUIRKS" );
        assert_eq!( command_name( 44 | ENVIRONMENT_EXPERIMENTAL ), "RETRO_ENVIRONMENT_SET_HW_SHARED_CONTEXT" );
        assert_eq!( command_name( 25 ), "25" );
        assert_eq!( command_name( ENVIRONMENT_GET_SENSOR_INTERFACE ), "RETRO_ENVIRONMENT_GET_SENSOR_INTERFACE" );
    }

    #[test]
    fn message_is_decoded() {
        let mut message = Message { msg: b"Hello\0".as_ptr() as *const c_char, frames: 180 };
        let line = unsafe { describe( ENVIRONMENT_SET_MESSAGE, as_data( &mut message ), true ) };
        assert_eq!( line, "environment(RETRO_ENVIRONMENT_SET_MESSAGE, msg=\"Hello\", frames=180) = true" );
    }

    #[test]
    fn unknown_command_only_shows_raw_values() {
        let mut value = 5u32;
        let data = as_data( &mut value );
        let line = unsafe { describe( 0xBEEF, data, false ) };
        assert_eq!( line, format!( "environment({}, {:p}) = false", 0xBEEF, data ) );
    }

    #[test]
    fn outputs_are_only_read_on_success() {
        let mut value = true;
        let data = as_data( &mut value );
        unsafe {
            assert_eq!( describe( ENVIRONMENT_GET_CAN_DUPE, data, true ), "environment(RETRO_ENVIRONMENT_GET_CAN_DUPE, true) = true" );
            assert_eq!( describe( ENVIRONMENT_GET_CAN_DUPE, data, false ), format!( "environment(RETRO_ENVIRONMENT_GET_CAN_DUPE, {:p}) = false", data ) );
        }
    }

    #[test]
    fn null_payload_is_shown_as_null() {
        let line = unsafe { describe( ENVIRONMENT_SET_PIXEL_FORMAT, ptr::null_mut(), false ) };
        assert_eq!( line, "environment(RETRO_ENVIRONMENT_SET_PIXEL_FORMAT, NULL) = false" );
        assert!( unsafe { describe_elements( ENVIRONMENT_SET_VARIABLES, ptr::null_mut() ) }.is_empty() );
    }

    #[test]
    fn pixel_format_and_language_use_their_names() {
        let mut format = PixelFormat::RGB565.to_uint();
        let mut language = Language::Japanese.to_uint();
        let mut bogus = 77 as c_uint;
        unsafe {
            assert_eq!( describe( ENVIRONMENT_SET_PIXEL_FORMAT, as_data( &mut format ), true ), "environment(RETRO_ENVIRONMENT_SET_PIXEL_FORMAT, RGB565) = true" );
            assert_eq!( describe( ENVIRONMENT_GET_LANGUAGE, as_data( &mut language ), true ), "environment(RETRO_ENVIRONMENT_GET_LANGUAGE, Japanese) = true" );
            assert_eq!( describe( ENVIRONMENT_SET_PIXEL_FORMAT, as_data( &mut bogus ), false ), "environment(RETRO_ENVIRONMENT_SET_PIXEL_FORMAT, 77) = false" );
        }
    }

    #[test]
    fn output_string_is_dereferenced() {
        let mut directory = b"/home/user/system\0".as_ptr() as *const c_char;
        let line = unsafe { describe( ENVIRONMENT_GET_SYSTEM_DIRECTORY, as_data( &mut directory ), true ) };
        assert_eq!( line, "environment(RETRO_ENVIRONMENT_GET_SYSTEM_DIRECTORY, \"/home/user/system\") = true" );
    }

    #[test]
    fn variables_are_walked_until_the_terminator() {
        let mut variables = [
            Variable { key: b"pinky_palette\0".as_ptr() as *const c_char, value: b"Palette; ntsc|pal\0".as_ptr() as *const c_char },
            Variable { key: b"pinky_overscan\0".as_ptr() as *const c_char, value: b"Overscan; on|off\0".as_ptr() as *const c_char },
            Variable { key: ptr::null(), value: ptr::null() }
        ];

        let data = variables.as_mut_ptr() as *mut c_void;
        unsafe {
            assert_eq!( describe( ENVIRONMENT_SET_VARIABLES, data, true ), "environment(RETRO_ENVIRONMENT_SET_VARIABLES, 2 variables) = true" );
            assert_eq!( describe_elements( ENVIRONMENT_SET_VARIABLES, data ), vec![
                "[0] key=\"pinky_palette\" value=\"Palette; ntsc|pal\"".to_owned(),
                "[1] key=\"pinky_overscan\" value=\"Overscan; on|off\"".to_owned()
            ]);
        }
    }

    #[test]
    fn input_descriptors_use_device_names() {
        let mut descriptors = [
            InputDescriptor { port: 0, device: DEVICE_JOYPAD, index: 0, id: DEVICE_ID_JOYPAD_A, description: b"Jump\0".as_ptr() as *const c_char },
            InputDescriptor { port: 1, device: DEVICE_ANALOG, index: DEVICE_INDEX_ANALOG_LEFT, id: DEVICE_ID_ANALOG_X, description: b"Steer\0".as_ptr() as *const c_char },
            InputDescriptor { port: 0, device: 0, index: 0, id: 0, description: ptr::null() }
        ];

        let data = descriptors.as_mut_ptr() as *mut c_void;
        unsafe {
            assert_eq!( describe( ENVIRONMENT_SET_INPUT_DESCRIPTORS, data, true ), "environment(RETRO_ENVIRONMENT_SET_INPUT_DESCRIPTORS, 2 descriptors) = true" );
            assert_eq!( describe_elements( ENVIRONMENT_SET_INPUT_DESCRIPTORS, data ), vec![
                "[0] port=0 device=RETRO_DEVICE_JOYPAD index=0 id=RETRO_DEVICE_ID_JOYPAD_A description=\"Jump\"".to_owned(),
                "[1] port=1 device=RETRO_DEVICE_ANALOG index=RETRO_DEVICE_INDEX_ANALOG_LEFT id=RETRO_DEVICE_ID_ANALOG_X description=\"Steer\"".to_owned()
            ]);
        }
    }

    #[test]
    fn get_variable_shows_the_value_only_when_answered() {
        let mut variable = Variable { key: b"pinky_palette\0".as_ptr() as *const c_char, value: ptr::null() };
        let data = as_data( &mut variable );
        unsafe {
            assert_eq!( describe( ENVIRONMENT_GET_VARIABLE, data, false ), "environment(RETRO_ENVIRONMENT_GET_VARIABLE, key=\"pinky_palette\") = false" );
            variable.value = b"pal\0".as_ptr() as *const c_char;
            assert_eq!( describe( ENVIRONMENT_GET_VARIABLE, data, true ), "environment(RETRO_ENVIRONMENT_GET_VARIABLE, key=\"pinky_palette\", value=\"pal\") = true" );
        }
    }

    #[test]
    fn opaque_payloads_show_their_address() {
        let mut interface = [0usize; 4];
        let data = as_data( &mut interface );
        let line = unsafe { describe( ENVIRONMENT_GET_LOG_INTERFACE, data, true ) };
        assert_eq!( line, format!( "environment(RETRO_ENVIRONMENT_GET_LOG_INTERFACE, {:p}) = true", data ) );
        assert_eq!( unsafe { describe( ENVIRONMENT_SHUTDOWN, ptr::null_mut(), true ) }, "environment(RETRO_ENVIRONMENT_SHUTDOWN) = true" );
    }
}
