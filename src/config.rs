// Fixed external references for the campaign page. Nothing here is fetched
// or parameterized at runtime.

pub fn get_survey_embed_url() -> &'static str {
    "https://docs.google.com/forms/d/e/1FAIpQLSdYzK_rgiZ2SkGV3aa7Za0lfA6rxLKrjcxTbxxWH6AEMjjG6A/viewform?embedded=true"
}

pub fn get_survey_fallback_url() -> &'static str {
    "https://docs.google.com/forms"
}

pub fn get_contact_email() -> &'static str {
    "info@jagapantai.org"
}

pub fn get_contact_phone() -> &'static str {
    "+62 123-4567"
}

pub fn get_contact_address() -> &'static str {
    "123 Pantai, Kota Surabaya"
}
