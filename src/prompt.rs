//! Prompt construction for the remote poem source.

use crate::region::Region;

/// Generic region name used when the code doesn't match a known region.
const FALLBACK_REGION_NAME: &str = "thailand";

/// Build the single-turn instruction sent to the generative model.
///
/// Pure and total: any region code and keyword list (including an empty
/// one) produces a prompt. The north region gets a fixed stylistic
/// modifier asking for a shorter rhyming form.
pub fn build_prompt(region_code: &str, keywords: &[String]) -> String {
    let region_name = Region::from_code(region_code)
        .map(|r| r.prompt_name())
        .unwrap_or(FALLBACK_REGION_NAME);

    let modifier = if region_code == "north" {
        "short rhyming "
    } else {
        ""
    };

    format!(
        "create a {}thai poem with {} and {}",
        modifier,
        region_name,
        keywords.join(", ")
    )
}
