// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::run;
use sitescan::extractors::compliance::ComplianceExtractor;
use sitescan::extractors::contact::ContactExtractor;
use sitescan::extractors::legal::LegalExtractor;

#[tokio::test]
async fn test_contact_emails_and_phones_deduplicated() {
    let html = r#"
        <html><body>
            <p>Reach us at info@example.com or sales@example.com.</p>
            <p>Again: info@example.com</p>
            <p>Phone: +90 212 555 44 33</p>
            <p>Intl: +44 2071234567</p>
        </body></html>
    "#;

    let contact = run(&ContactExtractor, html).await;

    let emails = contact["emails"].as_array().unwrap();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0], "info@example.com");
    assert_eq!(emails[1], "sales@example.com");

    let phones = contact["phones"].as_array().unwrap();
    assert!(phones.iter().any(|p| p == "+90 212 555 44 33"));
    assert!(phones.iter().any(|p| p == "+44 2071234567"));
}

#[tokio::test]
async fn test_contact_social_media_first_match_per_platform() {
    let html = r#"
        <html><body>
            <a href="https://facebook.com/acme">fb</a>
            <a href="https://facebook.com/acme-alt">fb2</a>
            <a href="https://linkedin.com/company/acme">li</a>
            <a href="https://instagram.com/acme">ig</a>
        </body></html>
    "#;

    let contact = run(&ContactExtractor, html).await;
    let social = &contact["social_media"];

    assert_eq!(social["facebook"], "https://facebook.com/acme");
    assert_eq!(social["linkedin"], "https://linkedin.com/company/acme");
    assert_eq!(social["instagram"], "https://instagram.com/acme");
    assert!(social.get("youtube").is_none());
}

#[tokio::test]
async fn test_contact_address_and_contact_pages() {
    let html = r#"
        <html><body>
            <div>Address: Mecidiyeköy Mah. Büyükdere Cad. No:12 Şişli İstanbul</div>
            <a href="/contact">Contact</a>
            <a href="/iletisim">İletişim</a>
        </body></html>
    "#;

    let contact = run(&ContactExtractor, html).await;

    let address = contact["address"].as_str().unwrap();
    assert!(address.contains("Büyükdere"));
    assert_eq!(contact["contact_page_urls"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_contact_address_length_bounds() {
    // Keyword present but the surrounding block is too short
    let html = r#"<html><body><div>Address</div></body></html>"#;

    let contact = run(&ContactExtractor, html).await;
    assert!(contact.get("address").is_none());
}

#[tokio::test]
async fn test_legal_links_kvkk_and_copyright() {
    let html = r#"
        <html><body>
            <a href="/privacy-policy">Privacy</a>
            <a href="/gizlilik">Gizlilik</a>
            <a href="/terms-of-service">Terms</a>
            <p>KVKK kapsamında kişisel verileriniz korunur.</p>
            <p>Veri sorumlusu: Acme A.Ş.</p>
            <footer>© 2025 Acme Corp</footer>
        </body></html>
    "#;

    let legal = run(&LegalExtractor, html).await;

    assert_eq!(legal["privacy_policy_urls"].as_array().unwrap().len(), 2);
    assert_eq!(
        legal["terms_urls"].as_array().unwrap()[0],
        "https://example.com/terms-of-service"
    );
    assert_eq!(legal["kvkk_compliance"]["mentioned"], true);
    assert!(legal["kvkk_compliance"]["mention_count"].as_u64().unwrap() >= 1);
    assert_eq!(legal["data_protection_officer"], true);
    assert_eq!(legal["copyright"], "© 2025 Acme Corp");
}

#[tokio::test]
async fn test_compliance_accessibility_and_cookie_notice() {
    let html = r##"
        <html lang="en"><body>
            <a href="#main">Skip to navigation</a>
            <img src="/a.jpg" alt="a">
            <img src="/b.jpg">
            <form><label for="q">Query</label><input id="q"></form>
            <div class="cookie-banner">We use cookies to improve the experience.</div>
        </body></html>
    "##;

    let compliance = run(&ComplianceExtractor, html).await;
    let accessibility = &compliance["accessibility"];

    assert_eq!(accessibility["images_total"], 2);
    assert_eq!(accessibility["images_with_alt"], 1);
    assert_eq!(accessibility["forms_with_labels"], 1);
    assert_eq!(accessibility["lang_attribute"], true);
    assert_eq!(accessibility["skip_navigation"], true);
    assert_eq!(compliance["cookie_notice"], true);
}

#[tokio::test]
async fn test_compliance_iso_certifications_deduplicated_in_order() {
    let html = r#"
        <html><body>
            <p>Certified ISO 9001 and ISO/IEC 27001.</p>
            <p>We maintain ISO 9001 across all sites.</p>
        </body></html>
    "#;

    let compliance = run(&ComplianceExtractor, html).await;
    let certifications = compliance["iso_certifications"].as_array().unwrap();

    assert_eq!(certifications.len(), 2);
    assert_eq!(certifications[0], "ISO 9001");
    assert_eq!(certifications[1], "ISO/IEC 27001");
}
