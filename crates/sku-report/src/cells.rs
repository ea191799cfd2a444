//! Header construction and cell cleanup shared by every writer.

use sku_model::SkuTable;

pub const PRODUCT_NAME_HEADER: &str = "Product Name";
pub const SKU_HEADER: &str = "Generated SKU";

/// `Product Name`, one column per axis label, then `Generated SKU`.
pub fn table_headers(table: &SkuTable) -> Vec<String> {
    let mut headers = Vec::with_capacity(table.axis_labels.len() + 2);
    headers.push(PRODUCT_NAME_HEADER.to_string());
    headers.extend(table.axis_labels.iter().map(|label| sanitize_cell(label)));
    headers.push(SKU_HEADER.to_string());
    headers
}

/// Removes markup tags and control characters, then trims.
///
/// A `<` only opens a tag when the next character can start one (a letter,
/// `/`, `!`, or `?`), so text such as `< 5 mm` survives.
pub fn sanitize_cell(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '<'
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'))
        {
            for inner in chars.by_ref() {
                if inner == '>' {
                    break;
                }
            }
            continue;
        }
        if ch.is_control() {
            continue;
        }
        out.push(ch);
    }
    out.trim().to_string()
}

/// Removes control characters only; SKUs keep any other character.
pub fn sanitize_sku(raw: &str) -> String {
    raw.chars().filter(|ch| !ch.is_control()).collect()
}

/// One sanitized output record per row, aligned with [`table_headers`].
pub(crate) fn table_records(table: &SkuTable) -> impl Iterator<Item = Vec<String>> + '_ {
    let product = sanitize_cell(&table.product_name);
    table.rows.iter().map(move |row| {
        let mut record = Vec::with_capacity(row.terms.len() + 2);
        record.push(product.clone());
        record.extend(row.terms.iter().map(|term| sanitize_cell(term)));
        record.push(sanitize_sku(&row.sku));
        record
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_controls() {
        assert_eq!(sanitize_cell("<b>Red</b>\t"), "Red");
        assert_eq!(sanitize_cell("Oak\u{0}<br/> Veneer"), "Oak Veneer");
        assert_eq!(sanitize_cell("<script>x</script>"), "x");
    }

    #[test]
    fn keeps_plain_angle_brackets() {
        assert_eq!(sanitize_cell("< 5 mm"), "< 5 mm");
        assert_eq!(sanitize_cell("3 > 2"), "3 > 2");
    }

    #[test]
    fn sku_keeps_markup_characters() {
        assert_eq!(sanitize_sku("A<B>\n"), "A<B>");
        assert_eq!(sanitize_sku("PANEL-WHT.OAK"), "PANEL-WHT.OAK");
    }

    #[test]
    fn headers_wrap_axis_labels() {
        let mut table = SkuTable::new("Shirt");
        table.axis_labels = vec!["Color".to_string(), "Size".to_string()];
        assert_eq!(
            table_headers(&table),
            vec!["Product Name", "Color", "Size", "Generated SKU"]
        );
    }
}
