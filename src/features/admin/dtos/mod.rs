mod admin_dto;

pub use admin_dto::{
    CityFilterDto, CountryFilterDto, CreateCityDto, CreateCountryDto, CreateDistrictDto,
    DistrictFilterDto, UpdateCityDto, UpdateCountryDto, UpdateDistrictDto,
};
