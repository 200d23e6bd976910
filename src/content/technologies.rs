//! "Technologies" page
//!
//! List order follows the stack from the bottom up and is part of the content.

use super::{Inline, LinkReference, ListItem, PageContent, PageMetadata, Section, SectionBody};

const STACK: [LinkReference; 7] = [
    LinkReference {
        label: "Python",
        href: "https://www.python.org/",
    },
    LinkReference {
        label: "Django",
        href: "https://www.djangoproject.com/",
    },
    LinkReference {
        label: "Django REST Framework",
        href: "https://www.django-rest-framework.org/",
    },
    LinkReference {
        label: "Djoser",
        href: "https://djoser.readthedocs.io/en/latest/index.html",
    },
    LinkReference {
        label: "PostgreSQL",
        href: "https://www.postgresql.org/",
    },
    LinkReference {
        label: "Gunicorn 'Green Unicorn'",
        href: "https://gunicorn.org/",
    },
    LinkReference {
        label: "NGINX",
        href: "https://nginx.org/ru/",
    },
];

static ITEMS: [ListItem; 8] = [
    Inline::Link(STACK[0]),
    Inline::Link(STACK[1]),
    Inline::Link(STACK[2]),
    Inline::Link(STACK[3]),
    Inline::Link(STACK[4]),
    Inline::Link(STACK[5]),
    Inline::Link(STACK[6]),
    Inline::Text("А так же различные библиотеки для Django."),
];

pub(super) static PAGE: PageContent = PageContent {
    metadata: PageMetadata {
        title: "О проекте",
        description: "Фудграм - Технологии",
        social_title: "О проекте",
    },
    heading: "Технологии",
    main: Section {
        title: "Технологии, которые применены в этом проекте:",
        body: SectionBody::List(&ITEMS),
    },
    aside: None,
};
