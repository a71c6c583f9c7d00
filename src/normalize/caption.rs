//! Pass 6: Caption Promoter

use crate::config::NormalizeOptions;
use crate::dom::ArenaDom;
use crate::table::{captions, find_tables};

/// Move each table `<caption>` out as a bold paragraph before the table.
///
/// `<table><caption>Note</caption>..</table>` becomes
/// `<p>**Note**</p><table>..</table>`. A blank caption is dropped without a
/// paragraph. Returns the number of paragraphs inserted.
pub fn promote_captions(dom: &mut ArenaDom, options: &NormalizeOptions) -> usize {
    let mut promoted = 0;

    for table in find_tables(dom, dom.document(), options.max_depth) {
        for caption in captions(dom, table.id) {
            let text = dom.text_of(caption).trim().to_string();
            dom.detach(caption);
            if text.is_empty() {
                continue;
            }

            let paragraph = dom.create_html_element("p");
            let bold = dom.create_text(format!("**{text}**"));
            dom.append(paragraph, bold);
            dom.insert_before(table.id, paragraph);
            promoted += 1;
        }
    }

    promoted
}
