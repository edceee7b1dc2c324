use chrono::Datelike;
use contracts::shared::site_config::Link;
use contracts::SiteConfig;
use leptos::prelude::*;

use crate::shared::components::ui::Separator;
use crate::shared::icons::icon;

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}

fn link_list(links: &[Link]) -> impl IntoView {
    view! {
        <ul class="footer__links">
            {links
                .iter()
                .map(|link| view! {
                    <li><a class="footer__link" href=link.href.clone()>{link.label.clone()}</a></li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = SiteConfig::builtin();
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content container">
                <div class="footer__grid">
                    <div class="footer__brand">
                        <div class="footer__brand-name">
                            {icon("shopping-bag")}
                            <span>{site.brand.name.clone()}</span>
                        </div>
                        <p class="muted">{site.brand.tagline.clone()}</p>
                    </div>

                    <div>
                        <h3 class="footer__heading">"Quick Links"</h3>
                        {link_list(site.quick_links())}
                    </div>

                    <div>
                        <h3 class="footer__heading">"Support"</h3>
                        {link_list(&site.footer.support_links)}
                    </div>

                    <div id="contact">
                        <h3 class="footer__heading">"Contact"</h3>
                        <ul class="footer__links">
                            <li class="footer__contact">{icon("mail")}<span>{site.contact.email.clone()}</span></li>
                            <li class="footer__contact">{icon("phone")}<span>{site.contact.phone.clone()}</span></li>
                            <li class="footer__contact">{icon("map-pin")}<span>{site.contact.address.clone()}</span></li>
                            <li class="footer__contact">
                                {icon("github")}
                                <a class="footer__link" href=site.contact.github_url.clone()>"GitHub"</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <Separator class="footer__separator" />

                <div class="footer__bottom">
                    <p class="muted">{copyright_line(year, &site.brand.name)}</p>
                    <div class="footer__legal">
                        {site
                            .footer
                            .legal_links
                            .iter()
                            .map(|link| view! {
                                <a class="footer__link" href=link.href.clone()>{link.label.clone()}</a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Shop Mins"),
            "© 2026 Shop Mins. All rights reserved."
        );
    }
}
