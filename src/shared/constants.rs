/// Super admin role - may manage the location hierarchy through the admin API
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Version segment baked into cache keys so a format change invalidates
/// everything previously stored
pub const CACHE_KEY_NAMESPACE: &str = "response:v1";
