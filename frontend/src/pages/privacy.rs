use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_title("Политика конфиденциальности — Премиум Ремонт".to_string());

    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Политика обработки персональных данных"}</h1>

            <section>
                <h2>{"1. Какие данные мы получаем"}</h2>
                <p>{"Отправляя заявку на сайте, вы передаёте:"}</p>
                <ul>
                    <li>{"Имя, чтобы мы знали, как к вам обращаться"}</li>
                    <li>{"Номер телефона для обратной связи по заявке"}</li>
                    <li>{"Тип объекта, площадь и комментарий для предварительной оценки"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Цели обработки"}</h2>
                <ul>
                    <li>{"Связаться с вами и обсудить детали ремонта"}</li>
                    <li>{"Подготовить коммерческое предложение по вашему запросу"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Аналитика"}</h2>
                <p>
                    {"Сайт использует Google Analytics. В аналитику передаётся только факт отправки формы и её тип (заявка или запрос КП); содержимое полей не передаётся."}
                </p>
            </section>

            <section>
                <h2>{"4. Ваши права"}</h2>
                <p>{"Вы можете в любой момент отозвать согласие на обработку данных, сообщив об этом через форму заявки на главной странице."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Вернуться на главную"}</Link<Route>>
            </div>
        </div>
    }
}
