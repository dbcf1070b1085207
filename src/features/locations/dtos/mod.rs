mod location_dto;

pub use location_dto::{CityDistrictsDto, CityDto, CountryCitiesDto, CountryDto, DistrictDto};
