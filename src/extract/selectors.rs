//! CSS selectors for the storefront product page markup.

use scraper::Selector;
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

// CSS selector strings
pub(crate) const APP_NAME_STR: &str = "div.apphub_AppName";
pub(crate) const HEADER_IMAGE_STR: &str = "img.game_header_image_full";
pub(crate) const DLC_MARKER_STR: &str = "div.game_area_dlc_bubble h1";
pub(crate) const DESCRIPTION_STR: &str = "div.game_description_snippet";
pub(crate) const RELEASE_DATE_STR: &str = "div.release_date div.date";
pub(crate) const DEVELOPERS_LIST_STR: &str = "div#developers_list";
pub(crate) const DEV_ROW_STR: &str = "div.dev_row";
pub(crate) const LINK_WITH_HREF_STR: &str = "a[href]";
pub(crate) const DETAILS_BLOCK_STR: &str = "div.details_block";
pub(crate) const LINK_STR: &str = "a";
pub(crate) const POPULAR_TAGS_STR: &str = "div.glance_tags.popular_tags a.app_tag";
pub(crate) const CATEGORY_SPECS_STR: &str = "#category_block div.game_area_details_specs";
pub(crate) const CATEGORY_NAME_STR: &str = "a.name";
pub(crate) const LANGUAGES_STR: &str = "table.game_language_options td.ellipsis";
pub(crate) const DISCOUNT_ORIGINAL_STR: &str = "div.discount_original_price";
pub(crate) const PURCHASE_PRICE_STR: &str = "div.game_purchase_price";
pub(crate) const DISCOUNT_FINAL_STR: &str = "div.discount_final_price";
pub(crate) const SUMMARY_COLUMN_STR: &str = "div.summary.column";
pub(crate) const REVIEW_SUMMARY_STR: &str = "span.game_review_summary";
pub(crate) const REVIEW_COUNT_STR: &str = "span.responsive_hidden";

macro_rules! selector {
    ($name:ident, $source:expr) => {
        pub(crate) static $name: LazyLock<Selector> =
            LazyLock::new(|| parse_selector_with_fallback($source, stringify!($name)));
    };
}

selector!(APP_NAME, APP_NAME_STR);
selector!(HEADER_IMAGE, HEADER_IMAGE_STR);
selector!(DLC_MARKER, DLC_MARKER_STR);
selector!(DESCRIPTION, DESCRIPTION_STR);
selector!(RELEASE_DATE, RELEASE_DATE_STR);
selector!(DEVELOPERS_LIST, DEVELOPERS_LIST_STR);
selector!(DEV_ROW, DEV_ROW_STR);
selector!(LINK_WITH_HREF, LINK_WITH_HREF_STR);
selector!(DETAILS_BLOCK, DETAILS_BLOCK_STR);
selector!(LINK, LINK_STR);
selector!(POPULAR_TAGS, POPULAR_TAGS_STR);
selector!(CATEGORY_SPECS, CATEGORY_SPECS_STR);
selector!(CATEGORY_NAME, CATEGORY_NAME_STR);
selector!(LANGUAGES, LANGUAGES_STR);
selector!(DISCOUNT_ORIGINAL, DISCOUNT_ORIGINAL_STR);
selector!(PURCHASE_PRICE, PURCHASE_PRICE_STR);
selector!(DISCOUNT_FINAL, DISCOUNT_FINAL_STR);
selector!(SUMMARY_COLUMN, SUMMARY_COLUMN_STR);
selector!(REVIEW_SUMMARY, REVIEW_SUMMARY_STR);
selector!(REVIEW_COUNT, REVIEW_COUNT_STR);
