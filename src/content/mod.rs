pub mod library;

pub use library::{
    amal_seed, dua_categories, hadiths, prayer_times, saved_duas, tasbih_phrase,
};
