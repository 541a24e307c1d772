//! Catalog item types and the fixed catalogs shown by the browsing pages.

/// A portfolio piece.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub year: String,
    pub description: String,
}

/// A journal article.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub full_content: String,
}

/// A unit of displayable content drawn from a fixed catalog.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogItem {
    Portfolio(PortfolioItem),
    Journal(JournalPost),
}

impl CatalogItem {
    pub fn id(&self) -> u32 {
        match self {
            CatalogItem::Portfolio(item) => item.id,
            CatalogItem::Journal(post) => post.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogItem::Portfolio(item) => &item.title,
            CatalogItem::Journal(post) => &post.title,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            CatalogItem::Portfolio(item) => &item.category,
            CatalogItem::Journal(post) => &post.category,
        }
    }
}

/// Filter bar entry: the category key matched against items and its label.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Category key that matches every item.
///
pub const ALL_CATEGORIES: &str = "all";

/// Return the filter bar for the portfolio page.
///
pub fn portfolio_categories() -> Vec<CategoryOption> {
    vec![
        CategoryOption { key: ALL_CATEGORIES, label: "All Work" },
        CategoryOption { key: "red-carpet", label: "Red Carpet" },
        CategoryOption { key: "editorial", label: "Editorial" },
        CategoryOption { key: "custom", label: "Custom" },
    ]
}

/// Return the filter bar for the journal page, one entry per post category
/// in order of first appearance.
///
pub fn journal_categories() -> Vec<CategoryOption> {
    vec![
        CategoryOption { key: ALL_CATEGORIES, label: "All Entries" },
        CategoryOption { key: "Reflections", label: "Reflections" },
        CategoryOption { key: "Case Study", label: "Case Study" },
        CategoryOption { key: "Process", label: "Process" },
    ]
}

/// Format a category key as the badge shown in the detail overlay.
///
/// Only the first hyphen becomes a space: "red-carpet" -> "RED CARPET".
pub fn category_badge(category: &str) -> String {
    category.replacen('-', " ", 1).to_uppercase()
}

/// Split long-form text into the paragraphs rendered by the detail overlay.
///
/// Segments are separated by a blank line, trimmed, and dropped when empty.
pub fn paragraphs(full_content: &str) -> Vec<&str> {
    full_content
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn portfolio_item(id: u32, category: &str, title: &str, year: &str, description: &str) -> CatalogItem {
    CatalogItem::Portfolio(PortfolioItem {
        id,
        category: category.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        description: description.to_string(),
    })
}

fn journal_post(
    id: u32,
    title: &str,
    excerpt: &str,
    date: &str,
    category: &str,
    full_content: &[&str],
) -> CatalogItem {
    CatalogItem::Journal(JournalPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        full_content: full_content.join("\n\n      "),
    })
}

/// Return the portfolio catalog.
///
pub fn portfolio_catalog() -> Vec<CatalogItem> {
    vec![
        portfolio_item(
            1,
            "red-carpet",
            "Gala Gown",
            "2024",
            "A stunning red carpet moment featuring hand-beaded silk organza with architectural draping. \
             Crafted for a prominent figure in the arts, this gown exemplifies our commitment to creating \
             pieces that command attention while maintaining elegant sophistication.",
        ),
        portfolio_item(
            2,
            "editorial",
            "Editorial Suite",
            "2024",
            "Featured in Vogue's autumn issue, this collection of separates demonstrates the versatility \
             of bespoke tailoring. Each piece was designed to work independently while creating a cohesive \
             story of modern femininity.",
        ),
        portfolio_item(
            3,
            "custom",
            "Bespoke Blazer",
            "2023",
            "A reimagining of the classic power blazer, featuring subtle waist shaping and hand-finished \
             details. Created for a CEO who wanted to challenge conventional boardroom attire while \
             maintaining authority and grace.",
        ),
        portfolio_item(
            4,
            "red-carpet",
            "Award Show Ensemble",
            "2024",
            "This dramatic ensemble made headlines at the Emmy Awards. The intricate beadwork took over \
             200 hours to complete, creating a piece that captured light and movement with every step.",
        ),
        portfolio_item(
            5,
            "editorial",
            "Magazine Feature",
            "2023",
            "Shot for Harper's Bazaar's craftsmanship feature, this piece showcases traditional couture \
             techniques adapted for the contemporary woman. Every seam tells a story of heritage and \
             innovation.",
        ),
        portfolio_item(
            6,
            "custom",
            "Wedding Guest Dress",
            "2024",
            "A celebration of understated elegance, this dress was created for a discerning client \
             attending her daughter's wedding. The piece balances formality with comfort, allowing the \
             wearer to feel both appropriate and authentically herself.",
        ),
    ]
}

/// Return the journal catalog.
///
pub fn journal_catalog() -> Vec<CatalogItem> {
    vec![
        journal_post(
            1,
            "The Women Who Made Me",
            "A reflection on the matriarchs of craft who shaped my understanding of what it means to \
             create with intention.",
            "January 2025",
            "Reflections",
            &[
                "In the quiet hours before dawn, when the world still sleeps and the studio holds its \
                 breath, I find myself thinking about the women who made me. Not just my mother, though \
                 she was the first to place fabric in my hands, but the countless seamstresses, tailors, \
                 and artisans whose fingerprints live on in every technique I've learned.",
                "There was Madame Dubois, who taught me that a seam is not just a joining of fabric, but \
                 a promise: a commitment to the woman who will trust her body to your creation.",
                "And then there was Rosa, the alterations specialist who worked in the basement of \
                 Bergdorf's. She taught me that fitting isn't just about measurements; it's about \
                 listening to what remains unspoken.",
                "Each of these women carried forward a tradition that stretches back centuries. In my \
                 work today, I carry them with me: their wisdom, their standards, their understanding \
                 that what we do is not just craft, but a form of care.",
            ],
        ),
        journal_post(
            2,
            "Behind the Seams: Olga's Bridal Journey",
            "From our first meeting to her wedding day, the story of how one gown became a symbol of \
             transformation.",
            "December 2024",
            "Case Study",
            &[
                "Olga arrived at our first consultation carrying a manila folder thick with inspiration \
                 images, fabric swatches, and handwritten notes. But more than that, she carried a story \
                 of heritage and a deep desire to honor her grandmother's memory.",
                "Her grandmother had been a seamstress in Ukraine. The only thing that survived the \
                 journey to America was a small piece of Venetian lace, carefully preserved through \
                 decades of uncertainty.",
                "As we worked together over the following months, what emerged was more than a wedding \
                 dress. It was a dialogue between past and present.",
                "On her wedding day, Olga didn't just wear a beautiful dress. She carried her \
                 grandmother's legacy forward, transformed but intact.",
            ],
        ),
        journal_post(
            3,
            "The Art of the Fitting",
            "Why the fitting room is sacred space, where vulnerability meets precision and garments \
             find their true form.",
            "November 2024",
            "Process",
            &[
                "The fitting room exists at the intersection of intimacy and expertise, vulnerability \
                 and precision. It is here that the true work of bespoke creation happens.",
                "A fitting is never just about measurements or adjustments. It is a conversation \
                 conducted in fabric and pins.",
                "The fitting room is also a space of trust. As a fitter, I hold this trust carefully.",
                "In the end, a successful fitting is one where the client forgets she is wearing clothes \
                 at all, leaving only the woman, confident and radiant, exactly as she is meant to be.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines_and_trim() {
        assert_eq!(paragraphs("Para one.\n\nPara two."), vec!["Para one.", "Para two."]);
    }

    #[test]
    fn paragraphs_drop_empty_segments() {
        let text = "\n\n  First  \n\n\n\n   \n\nSecond\n\n";
        assert_eq!(paragraphs(text), vec!["First", "Second"]);
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn paragraphs_keep_single_newlines_inside_a_paragraph() {
        assert_eq!(paragraphs("line one\nline two"), vec!["line one\nline two"]);
    }

    #[test]
    fn journal_posts_render_trimmed_paragraphs() {
        for item in journal_catalog() {
            let CatalogItem::Journal(post) = item else {
                panic!("journal catalog holds only posts");
            };
            let rendered = paragraphs(&post.full_content);
            assert_eq!(rendered.len(), 4);
            assert!(rendered.iter().all(|p| !p.starts_with(' ')));
        }
    }

    #[test]
    fn category_badge_replaces_first_hyphen() {
        assert_eq!(category_badge("red-carpet"), "RED CARPET");
        assert_eq!(category_badge("made-to-measure"), "MADE TO-MEASURE");
        assert_eq!(category_badge("custom"), "CUSTOM");
    }

    #[test]
    fn catalog_accessors() {
        let catalog = portfolio_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].id(), 1);
        assert_eq!(catalog[0].title(), "Gala Gown");
        assert_eq!(catalog[0].category(), "red-carpet");

        let journal = journal_catalog();
        assert_eq!(journal.len(), 3);
        assert_eq!(journal[1].category(), "Case Study");
    }

    #[test]
    fn every_portfolio_category_has_a_filter() {
        let keys: Vec<&str> = portfolio_categories().iter().map(|c| c.key).collect();
        for item in portfolio_catalog() {
            assert!(keys.contains(&item.category()));
        }
        assert_eq!(keys[0], ALL_CATEGORIES);
    }
}
