//! Site footer: brand blurb, contacts, and opening hours.

use leptos::prelude::*;

use crate::components::site_header::BRAND;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div>
                        <h4 class="site-footer__heading">
                            <span class="site-footer__logo" aria-hidden="true">"🚀"</span>
                            {BRAND}
                        </h4>
                        <p class="muted">"Развиваем таланты вашего ребенка с 2015 года"</p>
                    </div>
                    <div>
                        <h4 class="site-footer__heading">"Контакты"</h4>
                        <p class="muted">"📍 г. Москва, ул. Примерная, д. 123"</p>
                        <p class="muted">"📞 +7 (495) 123-45-67"</p>
                        <p class="muted">"✉️ info@detcentr.ru"</p>
                    </div>
                    <div>
                        <h4 class="site-footer__heading">"Часы работы"</h4>
                        <p class="muted">"Пн-Пт: 14:00 - 20:00"</p>
                        <p class="muted">"Сб: 10:00 - 18:00"</p>
                        <p class="muted">"Вс: выходной"</p>
                    </div>
                </div>
                <div class="site-footer__legal">
                    <p>"© 2024 " {BRAND} ". Все права защищены."</p>
                </div>
            </div>
        </footer>
    }
}
