/// Card scans from the public Rider-Waite set, keyed by `name_short`.
const IMAGE_URL_TEMPLATE: &str = "https://sacred-texts.com/tarot/pkt/img/{name_short}.jpg";

/// Resolve the image URL for a card. Pure substitution into the fixed
/// template; `name_short` is not validated or escaped.
pub fn card_image_url(name_short: &str) -> String {
    IMAGE_URL_TEMPLATE.replace("{name_short}", name_short)
}
