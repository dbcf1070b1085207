mod city_store;
mod country_store;
mod district_store;

pub use city_store::CityStore;
pub use country_store::CountryStore;
pub use district_store::DistrictStore;
