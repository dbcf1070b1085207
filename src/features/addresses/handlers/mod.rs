pub mod address_handler;

pub use address_handler::{
    __path_create_address, __path_delete_address, __path_get_address, __path_list_addresses,
    __path_update_address, create_address, delete_address, get_address, list_addresses,
    update_address,
};
