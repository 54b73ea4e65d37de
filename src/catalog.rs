//! Demo listing page.
//!
//! Builds the document the desktop app renders: a nav bar with search, the
//! "All" panel, the shop grid of cards and the footer. Class names match the
//! default page config selectors.

use shopfront_core::dom::{Document, ElementBuilder};

/// One listing card
struct Product {
    title: &'static str,
    /// Placeholder image tint
    tint: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product { title: "Clothes", tint: "#f3d9c6" },
    Product { title: "Health & Personal Care", tint: "#d6ecd2" },
    Product { title: "Furniture", tint: "#e7dcc8" },
    Product { title: "Electronics", tint: "#cfdcec" },
    Product { title: "Beauty Picks", tint: "#f2d3e0" },
    Product { title: "Pet Care", tint: "#e0e6c5" },
    Product { title: "New Arrival in Toys", tint: "#f6e7b0" },
    Product { title: "Discover Fashion Trends", tint: "#dcd3f0" },
    Product { title: r#"Men's <Shoes> & "Sale""#, tint: "#d5e5e8" },
];

const PANEL_LINKS: &[&str] = &[
    "Today's Deals",
    "Customer Service",
    "Registry",
    "Gift Cards",
    "Sell",
];

fn product_card(product: &Product) -> ElementBuilder {
    ElementBuilder::new("div").class("box").child(
        ElementBuilder::new("div")
            .class("boxcontent")
            .child(ElementBuilder::new("h2").text(product.title))
            .child(
                ElementBuilder::new("div")
                    .class("boximg")
                    .style("background-color", product.tint),
            )
            .child(ElementBuilder::new("p").text("See more")),
    )
}

/// Build the listing page document
pub fn listing_document() -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    doc.append(
        body,
        ElementBuilder::new("header").class("navbar").children([
            ElementBuilder::new("div").class("nav-logo").text("shopfront"),
            ElementBuilder::new("div").class("nav-search").children([
                ElementBuilder::new("input")
                    .class("searchinput")
                    .placeholder("Search Shopfront  ( / )"),
                ElementBuilder::new("div").class("searchicon").text("\u{1F50D}"),
            ]),
            ElementBuilder::new("div").class("nav-cart").text("Cart"),
        ]),
    );

    doc.append(
        body,
        ElementBuilder::new("div").class("panel").children([
            ElementBuilder::new("div").class("panelall").text("\u{2630} All"),
            ElementBuilder::new("div").class("panelops").children(
                PANEL_LINKS
                    .iter()
                    .map(|&link| ElementBuilder::new("p").text(link)),
            ),
        ]),
    );

    doc.append(
        body,
        ElementBuilder::new("section")
            .class("hero-section")
            .child(ElementBuilder::new("h1").text("Shop deals in every department")),
    );

    doc.append(
        body,
        ElementBuilder::new("div")
            .class("shop")
            .children(PRODUCTS.iter().map(product_card)),
    );

    doc.append(
        body,
        ElementBuilder::new("footer").children([
            ElementBuilder::new("div").class("footpanel1").text("Back to top"),
            ElementBuilder::new("div")
                .class("footpanel4")
                .child(ElementBuilder::new("p").text("\u{00A9} Shopfront demo")),
        ]),
    );

    doc
}
