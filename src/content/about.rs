//! "About the project" page

use super::{
    ContentBlock, Inline, LinkReference, PageContent, PageMetadata, Paragraph, Section,
    SectionBody,
};

const GITHUB: &str = "https://github.com/FuntikPiggy";
const VK: &str = "https://vk.com/FuntikPiggy";
const TELEGRAM: &str = "https://t.me/FuntikPiggy";

pub(super) static PAGE: PageContent = PageContent {
    metadata: PageMetadata {
        title: "О проекте",
        description: "Пищеблог - О проекте",
        social_title: "О проекте",
    },
    heading: "Привет!",
    main: Section {
        title: "Что это за сайт?",
        body: SectionBody::Text(ContentBlock {
            paragraphs: &[
                Paragraph(&[Inline::Text(
                    "Представляю вам проект, созданный во время обучения в Яндекс Практикуме. \
                     Этот проект — часть учебного курса, фронтенд проекта предоставлен в качестве \
                     исходных данных, бэкэнд же разработан самостоятельно и отредактирован \
                     в соответствии с рекомендациями и требованиями опытных ревьюеров и наставников.",
                )]),
                // Purpose, registration notes and the invitation share one paragraph
                Paragraph(&[Inline::Text(
                    "Цель этого сайта — дать возможность пользователям создавать и хранить рецепты \
                     на онлайн-платформе. Кроме того, можно скачать список продуктов, необходимых \
                     для приготовления блюда, просмотреть рецепты друзей и добавить любимые рецепты \
                     в список избранных. Чтобы использовать все возможности сайта — нужна регистрация. \
                     Проверка адреса электронной почты не осуществляется, вы можете ввести любой email. \
                     Использование введённого вами адреса для отправки каких-либо писем \
                     не предусмотрено, можете не переживать, что упустите какое-то важное сообщение :) \
                     Заходите и делитесь своими любимыми рецептами!",
                )]),
            ],
        }),
    },
    aside: Some(Section {
        title: "Ссылки",
        body: SectionBody::Text(ContentBlock {
            paragraphs: &[
                Paragraph(&[
                    Inline::Text("Код проекта находится тут - "),
                    Inline::Link(LinkReference {
                        label: "Github",
                        href: GITHUB,
                    }),
                ]),
                Paragraph(&[Inline::Text("Автор проекта: Гурин Валерий Сергеевич")]),
                Paragraph(&[
                    Inline::Text("Автор проекта: "),
                    Inline::Link(LinkReference {
                        label: "VK",
                        href: VK,
                    }),
                    Inline::Text(", "),
                    Inline::Link(LinkReference {
                        label: "Telegram",
                        href: TELEGRAM,
                    }),
                ]),
            ],
        }),
    }),
};
