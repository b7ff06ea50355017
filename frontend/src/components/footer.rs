use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::YEAR_ID;
use crate::Route;

pub fn current_year() -> i32 {
    Local::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_state(current_year);

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p>
                    {"© "}
                    <span id={YEAR_ID}>{year.to_string()}</span>
                    {" Премиум Ремонт. Все права защищены."}
                </p>
                <Link<Route> to={Route::Privacy} classes="footer-link">
                    {"Политика конфиденциальности"}
                </Link<Route>>
            </div>
        </footer>
    }
}
