use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animations;
use crate::capabilities::Capabilities;
use crate::components::lead_form::LeadForm;

struct Service {
    title: &'static str,
    text: &'static str,
    image: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Квартиры под ключ",
        text: "Черновые и чистовые работы, инженерия, отделка и уборка после ремонта.",
        image: "/assets/apartment.jpg",
    },
    Service {
        title: "Ванные комнаты",
        text: "Гидроизоляция, плитка, сантехника и скрытые инсталляции.",
        image: "/assets/bathroom.jpg",
    },
    Service {
        title: "Дизайн-проект",
        text: "Обмерный план, визуализации и ведомость материалов до начала работ.",
        image: "/assets/design.jpg",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title("Премиум Ремонт — ремонт квартир под ключ".to_string());
    let caps = use_context::<Capabilities>().unwrap_or_default();

    // Decorative effects, bound once the markup is in the DOM
    {
        use_effect_with_deps(
            move |_| {
                let guard = animations::init(&caps);
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            // Hero Section
            <section id="hero" class="hero">
                <div class="space-y-10">
                    <h1 id="hero-title">{"Ремонт, за который не стыдно"}</h1>
                    <p class="text-lg">
                        {"Фиксированная смета, собственные бригады и технадзор на каждом этапе."}
                    </p>
                    <a href="#contact" class="cta hero-cta">{"Рассчитать стоимость"}</a>
                </div>
            </section>

            // Services
            <section id="services" class="services">
                <h2>{"Что мы делаем"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <article class="card-hover" data-aos="fade-up">
                            <div class="aspect-[3/2] overflow-hidden">
                                <img src={service.image} loading="lazy" alt={service.title} />
                            </div>
                            <div class="card-body">
                                <h3>{service.title}</h3>
                                <p>{service.text}</p>
                            </div>
                        </article>
                    }) }
                </div>
            </section>

            // Insights
            <section id="insights" class="insights">
                <div class="insight">
                    <span class="text-2xl">{"12+ лет"}</span>
                    <p>{"на рынке"}</p>
                </div>
                <div class="insight">
                    <span class="text-2xl">{"98%"}</span>
                    <p>{"объектов сданы в срок"}</p>
                </div>
                <div class="insight">
                    <span class="text-2xl">{"4.9"}</span>
                    <p>{"средняя оценка клиентов"}</p>
                </div>
            </section>

            // How we work
            <section id="process" class="process">
                <h2>{"Как мы работаем"}</h2>
                <ul class="space-y-3">
                    <li>{"Бесплатный выезд замерщика и консультация"}</li>
                    <li>{"Смета с фиксированной ценой в договоре"}</li>
                    <li>{"Поэтапная приёмка работ с фотоотчётом"}</li>
                    <li>{"Гарантия 3 года на все виды работ"}</li>
                </ul>
            </section>

            // Lead form
            <section id="contact" class="contact" data-aos="fade-up">
                <h2>{"Оставьте заявку"}</h2>
                <p>{"Перезвоним в течение рабочего дня или пришлём коммерческое предложение."}</p>
                <LeadForm />
            </section>
        </main>
    }
}
