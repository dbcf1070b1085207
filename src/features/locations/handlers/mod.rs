pub mod location_handler;

pub use location_handler::{
    __path_list_cities_by_country, __path_list_countries, __path_list_districts_by_city,
    list_cities_by_country, list_countries, list_districts_by_city, LocationState,
};
