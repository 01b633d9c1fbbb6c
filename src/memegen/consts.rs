pub const LANGUAGE_CODE: &str = "en";
pub const GENERATOR_ID: &str = "6693723";

pub const RESULT_KEY: &str = "result";
pub const INSTANCE_IMAGE_URL_KEY: &str = "instanceImageUrl";
