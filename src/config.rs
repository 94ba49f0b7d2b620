#[cfg(debug_assertions)]
pub fn get_whatsapp_recipient() -> &'static str {
    "+15005550006"  // Test number used while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_whatsapp_recipient() -> &'static str {
    "+393451230067"  // Front desk number
}
