mod city;
mod country;
mod district;

pub use city::City;
pub use country::Country;
pub use district::District;
