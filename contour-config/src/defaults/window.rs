//! Default values for window settings.

pub fn columns() -> u16 {
    80
}

pub fn lines() -> u16 {
    25
}

pub fn wm_class() -> String {
    "contour".to_string()
}
