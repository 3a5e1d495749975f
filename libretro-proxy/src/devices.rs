//! Symbolic names for the input device constants that show up in input
//! descriptors.

use libc::c_uint;
use libretro_sys::*;

static DEVICE_TYPES: &[(c_uint, &str)] = &[
    (DEVICE_NONE, "RETRO_DEVICE_NONE"),
    (DEVICE_JOYPAD, "RETRO_DEVICE_JOYPAD"),
    (DEVICE_MOUSE, "RETRO_DEVICE_MOUSE"),
    (DEVICE_KEYBOARD, "RETRO_DEVICE_KEYBOARD"),
    (DEVICE_LIGHTGUN, "RETRO_DEVICE_LIGHTGUN"),
    (DEVICE_ANALOG, "RETRO_DEVICE_ANALOG"),
    (DEVICE_POINTER, "RETRO_DEVICE_POINTER"),
];

static ANALOG_INDICES: &[(c_uint, &str)] = &[
    (DEVICE_INDEX_ANALOG_LEFT, "RETRO_DEVICE_INDEX_ANALOG_LEFT"),
    (DEVICE_INDEX_ANALOG_RIGHT, "RETRO_DEVICE_INDEX_ANALOG_RIGHT"),
    (2, "RETRO_DEVICE_INDEX_ANALOG_BUTTON"),
];

static JOYPAD_IDS: &[(c_uint, &str)] = &[
    (DEVICE_ID_JOYPAD_B, "RETRO_DEVICE_ID_JOYPAD_B"),
    (DEVICE_ID_JOYPAD_Y, "RETRO_DEVICE_ID_JOYPAD_Y"),
    (DEVICE_ID_JOYPAD_SELECT, "RETRO_DEVICE_ID_JOYPAD_SELECT"),
    (DEVICE_ID_JOYPAD_START, "RETRO_DEVICE_ID_JOYPAD_START"),
    (DEVICE_ID_JOYPAD_UP, "RETRO_DEVICE_ID_JOYPAD_UP"),
    (DEVICE_ID_JOYPAD_DOWN, "RETRO_DEVICE_ID_JOYPAD_DOWN"),
    (DEVICE_ID_JOYPAD_LEFT, "RETRO_DEVICE_ID_JOYPAD_LEFT"),
    (DEVICE_ID_JOYPAD_RIGHT, "RETRO_DEVICE_ID_JOYPAD_RIGHT"),
    (DEVICE_ID_JOYPAD_A, "RETRO_DEVICE_ID_JOYPAD_A"),
    (DEVICE_ID_JOYPAD_X, "RETRO_DEVICE_ID_JOYPAD_X"),
    (DEVICE_ID_JOYPAD_L, "RETRO_DEVICE_ID_JOYPAD_L"),
    (DEVICE_ID_JOYPAD_R, "RETRO_DEVICE_ID_JOYPAD_R"),
    (DEVICE_ID_JOYPAD_L2, "RETRO_DEVICE_ID_JOYPAD_L2"),
    (DEVICE_ID_JOYPAD_R2, "RETRO_DEVICE_ID_JOYPAD_R2"),
    (DEVICE_ID_JOYPAD_L3, "RETRO_DEVICE_ID_JOYPAD_L3"),
    (DEVICE_ID_JOYPAD_R3, "RETRO_DEVICE_ID_JOYPAD_R3"),
    (256, "RETRO_DEVICE_ID_JOYPAD_MASK"),
];

static ANALOG_IDS: &[(c_uint, &str)] = &[
    (DEVICE_ID_ANALOG_X, "RETRO_DEVICE_ID_ANALOG_X"),
    (DEVICE_ID_ANALOG_Y, "RETRO_DEVICE_ID_ANALOG_Y"),
];

static MOUSE_IDS: &[(c_uint, &str)] = &[
    (DEVICE_ID_MOUSE_X, "RETRO_DEVICE_ID_MOUSE_X"),
    (DEVICE_ID_MOUSE_Y, "RETRO_DEVICE_ID_MOUSE_Y"),
    (DEVICE_ID_MOUSE_LEFT, "RETRO_DEVICE_ID_MOUSE_LEFT"),
    (DEVICE_ID_MOUSE_RIGHT, "RETRO_DEVICE_ID_MOUSE_RIGHT"),
    (DEVICE_ID_MOUSE_WHEELUP, "RETRO_DEVICE_ID_MOUSE_WHEELUP"),
    (DEVICE_ID_MOUSE_WHEELDOWN, "RETRO_DEVICE_ID_MOUSE_WHEELDOWN"),
    (DEVICE_ID_MOUSE_MIDDLE, "RETRO_DEVICE_ID_MOUSE_MIDDLE"),
    (DEVICE_ID_MOUSE_HORIZ_WHEELUP, "RETRO_DEVICE_ID_MOUSE_HORIZ_WHEELUP"),
    (DEVICE_ID_MOUSE_HORIZ_WHEELDOWN, "RETRO_DEVICE_ID_MOUSE_HORIZ_WHEELDOWN"),
    (9, "RETRO_DEVICE_ID_MOUSE_BUTTON_4"),
    (10, "RETRO_DEVICE_ID_MOUSE_BUTTON_5"),
];

// libretro-sys only knows the old lightgun ids; 3 and 4 were renamed since.
static LIGHTGUN_IDS: &[(c_uint, &str)] = &[
    (DEVICE_ID_LIGHTGUN_X, "RETRO_DEVICE_ID_LIGHTGUN_X"),
    (DEVICE_ID_LIGHTGUN_Y, "RETRO_DEVICE_ID_LIGHTGUN_Y"),
    (DEVICE_ID_LIGHTGUN_TRIGGER, "RETRO_DEVICE_ID_LIGHTGUN_TRIGGER"),
    (3, "RETRO_DEVICE_ID_LIGHTGUN_AUX_A"),
    (4, "RETRO_DEVICE_ID_LIGHTGUN_AUX_B"),
    (DEVICE_ID_LIGHTGUN_PAUSE, "RETRO_DEVICE_ID_LIGHTGUN_PAUSE"),
    (DEVICE_ID_LIGHTGUN_START, "RETRO_DEVICE_ID_LIGHTGUN_START"),
    (7, "RETRO_DEVICE_ID_LIGHTGUN_SELECT"),
    (8, "RETRO_DEVICE_ID_LIGHTGUN_AUX_C"),
    (9, "RETRO_DEVICE_ID_LIGHTGUN_DPAD_UP"),
    (10, "RETRO_DEVICE_ID_LIGHTGUN_DPAD_DOWN"),
    (11, "RETRO_DEVICE_ID_LIGHTGUN_DPAD_LEFT"),
    (12, "RETRO_DEVICE_ID_LIGHTGUN_DPAD_RIGHT"),
    (13, "RETRO_DEVICE_ID_LIGHTGUN_SCREEN_X"),
    (14, "RETRO_DEVICE_ID_LIGHTGUN_SCREEN_Y"),
    (15, "RETRO_DEVICE_ID_LIGHTGUN_IS_OFFSCREEN"),
    (16, "RETRO_DEVICE_ID_LIGHTGUN_RELOAD"),
];

static POINTER_IDS: &[(c_uint, &str)] = &[
    (DEVICE_ID_POINTER_X, "RETRO_DEVICE_ID_POINTER_X"),
    (DEVICE_ID_POINTER_Y, "RETRO_DEVICE_ID_POINTER_Y"),
    (DEVICE_ID_POINTER_PRESSED, "RETRO_DEVICE_ID_POINTER_PRESSED"),
    (3, "RETRO_DEVICE_ID_POINTER_COUNT"),
];

fn find( table: &'static [(c_uint, &'static str)], value: c_uint ) -> Option< &'static str > {
    table.iter().find( |&&(key, _)| key == value ).map( |&(_, name)| name )
}

/// Name of a base device type; subclassed devices have no name of their own.
pub fn device_type_name( device: c_uint ) -> Option< &'static str > {
    find( DEVICE_TYPES, device )
}

/// Name of an index for the given device (only analog devices have named indices).
pub fn device_index_name( device: c_uint, index: c_uint ) -> Option< &'static str > {
    match device & DEVICE_MASK {
        DEVICE_ANALOG => find( ANALOG_INDICES, index ),
        _ => None
    }
}

/// Name of an input id for the given device.
pub fn device_id_name( device: c_uint, id: c_uint ) -> Option< &'static str > {
    let table = match device & DEVICE_MASK {
        DEVICE_JOYPAD => JOYPAD_IDS,
        DEVICE_ANALOG => ANALOG_IDS,
        DEVICE_MOUSE => MOUSE_IDS,
        DEVICE_LIGHTGUN => LIGHTGUN_IDS,
        DEVICE_POINTER => POINTER_IDS,
        _ => return None
    };

    find( table, id )
}

pub fn describe_device( device: c_uint ) -> String {
    let subclass = device >> DEVICE_TYPE_SHIFT;
    match device_type_name( device & DEVICE_MASK ) {
        Some( name ) if subclass == 0 => name.to_owned(),
        Some( name ) => format!( "RETRO_DEVICE_SUBCLASS({}, {})", name, subclass - 1 ),
        None => device.to_string()
    }
}

pub fn describe_device_index( device: c_uint, index: c_uint ) -> String {
    device_index_name( device, index ).map( |name| name.to_owned() ).unwrap_or_else( || index.to_string() )
}

pub fn describe_device_id( device: c_uint, id: c_uint ) -> String {
    device_id_name( device, id ).map( |name| name.to_owned() ).unwrap_or_else( || id.to_string() )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_devices_have_names() {
        assert_eq!( describe_device( DEVICE_JOYPAD ), "RETRO_DEVICE_JOYPAD" );
        assert_eq!( describe_device( DEVICE_POINTER ), "RETRO_DEVICE_POINTER" );
        assert_eq!( device_type_name( 7 ), None );
        assert_eq!( describe_device( 7 ), "7" );
    }

    #[test]
    fn subclassed_devices_show_their_base() {
        let multitap = ((1 + 1) << DEVICE_TYPE_SHIFT) | DEVICE_JOYPAD;
        assert_eq!( describe_device( multitap ), "RETRO_DEVICE_SUBCLASS(RETRO_DEVICE_JOYPAD, 1)" );
        assert_eq!( device_type_name( multitap ), None );
    }

    #[test]
    fn ids_depend_on_the_device() {
        assert_eq!( describe_device_id( DEVICE_JOYPAD, DEVICE_ID_JOYPAD_A ), "RETRO_DEVICE_ID_JOYPAD_A" );
        assert_eq!( describe_device_id( DEVICE_ANALOG, DEVICE_ID_ANALOG_Y ), "RETRO_DEVICE_ID_ANALOG_Y" );
        assert_eq!( describe_device_id( DEVICE_MOUSE, 10 ), "RETRO_DEVICE_ID_MOUSE_BUTTON_5" );
        assert_eq!( describe_device_id( DEVICE_LIGHTGUN, 16 ), "RETRO_DEVICE_ID_LIGHTGUN_RELOAD" );
        assert_eq!( describe_device_id( DEVICE_KEYBOARD, 13 ), "13" );
        assert_eq!( describe_device_id( DEVICE_JOYPAD, 99 ), "99" );
    }

    #[test]
    fn only_analog_devices_have_named_indices() {
        assert_eq!( describe_device_index( DEVICE_ANALOG, DEVICE_INDEX_ANALOG_RIGHT ), "RETRO_DEVICE_INDEX_ANALOG_RIGHT" );
        assert_eq!( describe_device_index( DEVICE_ANALOG, 2 ), "RETRO_DEVICE_INDEX_ANALOG_BUTTON" );
        assert_eq!( describe_device_index( DEVICE_JOYPAD, 0 ), "0" );
    }
}
