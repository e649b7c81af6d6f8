//! Static UI strings for the two site languages.
//!
//! Dynamic content lives in the catalog; these are the fixed labels the
//! chrome and page headers render, plus the landing page copy, which is
//! entirely static. The table is selected whole by language so a page
//! never mixes locales.

use ananta_core::Lang;
use serde::Serialize;

/// Labels for the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavStrings {
    /// Landing page link.
    pub home: &'static str,
    /// Journal link.
    pub blog: &'static str,
    /// Events link.
    pub events: &'static str,
    /// Retreats link.
    pub retreats: &'static str,
}

/// Header strings for a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Page title.
    pub title: &'static str,
    /// Introductory paragraph.
    pub intro: &'static str,
    /// Supporting note below the listing.
    pub note: &'static str,
}

/// Labels for the retreat detail sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetreatDetailStrings {
    /// Benefits section heading.
    pub benefits: &'static str,
    /// Inclusions section heading.
    pub includes: &'static str,
    /// Activities section heading.
    pub activities: &'static str,
    /// Preparation section heading.
    pub preparation: &'static str,
}

/// Hero banner copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeHeroStrings {
    /// Small kicker above the title.
    pub kicker: &'static str,
    /// Hero title.
    pub title: &'static str,
    /// Hero body paragraph.
    pub body: &'static str,
    /// Schedule call-to-action label.
    pub cta_schedule: &'static str,
    /// Retreats call-to-action label.
    pub cta_retreats: &'static str,
    /// First hero badge.
    pub badge1: &'static str,
    /// Second hero badge.
    pub badge2: &'static str,
    /// Third hero badge.
    pub badge3: &'static str,
}

/// Studio introduction copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAboutStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Section title.
    pub title: &'static str,
    /// First body paragraph.
    pub body1: &'static str,
    /// Second body paragraph.
    pub body2: &'static str,
    /// First highlight card.
    pub card1: &'static str,
    /// Second highlight card.
    pub card2: &'static str,
    /// Third highlight card.
    pub card3: &'static str,
}

/// One practice offering card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfferingStrings {
    /// Offering title.
    pub title: &'static str,
    /// Offering subtitle.
    pub subtitle: &'static str,
    /// Offering description.
    pub description: &'static str,
}

/// Offerings section copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOfferingsStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Section title.
    pub title: &'static str,
    /// Introductory paragraph.
    pub intro: &'static str,
    /// Yoga offering card.
    pub yoga: OfferingStrings,
    /// Meditation offering card.
    pub meditation: OfferingStrings,
    /// Sound offering card.
    pub sound: OfferingStrings,
}

/// Weekly schedule section copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeScheduleStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Section title.
    pub title: &'static str,
    /// Full calendar link label.
    pub full_calendar: &'static str,
    /// Supporting note below the schedule.
    pub note: &'static str,
}

/// Studio space section copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSpaceStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Section title.
    pub title: &'static str,
    /// Introductory paragraph.
    pub intro: &'static str,
}

/// Testimonials section copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeTestimonialsStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Section title.
    pub title: &'static str,
}

/// Closing invitation copy on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeClosingStrings {
    /// Small kicker above the title.
    pub section_label: &'static str,
    /// Section title.
    pub title: &'static str,
    /// Body paragraph.
    pub body: &'static str,
    /// Class call-to-action label.
    pub cta_class: &'static str,
    /// Retreats call-to-action label.
    pub cta_retreats: &'static str,
}

/// The landing page string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomeStrings {
    /// Hero banner.
    pub hero: HomeHeroStrings,
    /// Studio introduction.
    pub about: HomeAboutStrings,
    /// Practice offerings.
    pub offerings: HomeOfferingsStrings,
    /// Weekly schedule header.
    pub schedule: HomeScheduleStrings,
    /// Studio space section.
    pub space: HomeSpaceStrings,
    /// Testimonials header.
    pub testimonials: HomeTestimonialsStrings,
    /// Closing invitation.
    pub closing: HomeClosingStrings,
}

/// The full static string table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    /// Navigation labels.
    pub nav: NavStrings,
    /// Label for the language switcher.
    pub language_label: &'static str,
    /// Landing page copy.
    pub home: HomeStrings,
    /// Journal page header.
    pub blog: SectionStrings,
    /// Events page header.
    pub events: SectionStrings,
    /// Retreats page header.
    pub retreats: SectionStrings,
    /// Retreat detail section headings.
    pub retreat_detail: RetreatDetailStrings,
    /// Contact address for retreat inquiries.
    pub retreats_email: &'static str,
}

const EN: UiStrings = UiStrings {
    nav: NavStrings {
        home: "Home",
        blog: "Blog",
        events: "Events",
        retreats: "Retreats",
    },
    language_label: "Language",
    home: HomeStrings {
        hero: HomeHeroStrings {
            kicker: "Yoga · Meditation · Sound",
            title: "Where the infinite begins.",
            body: "Ananta is a sanctuary for curious, thoughtful practice. A studio \
                   where breath slows, nervous systems soften, and every body is \
                   welcomed exactly as it is.",
            cta_schedule: "View Schedule",
            cta_retreats: "Explore Retreats",
            badge1: "All levels welcome",
            badge2: "Small, intimate groups",
            badge3: "In-studio & online",
        },
        about: HomeAboutStrings {
            section_label: "The Studio",
            title: "Rooted in earth. Open to the infinite.",
            body1: "Ananta is designed as a living, breathing altar to stillness. \
                    Forest-green walls, linen cushions, warm wood, and soft \
                    candlelight invite your body to soften on arrival. The space is \
                    intimate, scent-light, and deliberately quiet — a refuge from \
                    the city's constant noise.",
            body2: "Our teachers honour tradition while speaking in a clear, \
                    contemporary voice. Each class is an invitation to move with \
                    intention, rest deeply, and remember that nothing about you \
                    needs to be fixed.",
            card1: "Small groups of 10–14 students keep every session spacious, \
                    personal, and quietly held.",
            card2: "Trauma-sensitive language, inclusive sequencing, and optional \
                    assists honour every body's boundaries.",
            card3: "Crystal bowls, Tibetan bowls, and curated ambient soundscapes \
                    support nervous-system restoration.",
        },
        offerings: HomeOfferingsStrings {
            section_label: "Offerings",
            title: "Practices for every nervous system.",
            intro: "Move, breathe, or simply lie down and listen. Choose the format \
                    that meets you where you are — morning, midday, or late evening.",
            yoga: OfferingStrings {
                title: "Yoga Rituals",
                subtitle: "Vinyasa · Hatha · Restorative",
                description: "Slow, breath-led sequences that build strength and \
                              mobility without urgency. Expect floor work, \
                              intentional holds, and spacious savasana.",
            },
            meditation: OfferingStrings {
                title: "Meditation Circles",
                subtitle: "Stillness · Breath · Inquiry",
                description: "Guided practices that explore mindfulness, mantra, and \
                              silent sitting. Ideal for both brand-new and seasoned \
                              meditators.",
            },
            sound: OfferingStrings {
                title: "Sound Journeys",
                subtitle: "Bowls · Gongs · Voice",
                description: "Immersive sound baths designed to support deep rest \
                              and energetic realignment. Lie down, be held, and \
                              receive.",
            },
        },
        schedule: HomeScheduleStrings {
            section_label: "Weekly Rhythm",
            title: "A week woven from stillness.",
            full_calendar: "Full calendar",
            note: "Full schedule, pricing, and memberships are available at the \
                   studio and via email on request.",
        },
        space: HomeSpaceStrings {
            section_label: "The Space",
            title: "A sacred space, held lightly.",
            intro: "Every texture — linen, rattan, stone, leaf — is chosen to soothe \
                    overstimulated senses. Step inside and feel your shoulders drop.",
        },
        testimonials: HomeTestimonialsStrings {
            section_label: "Words from the community",
            title: "Stories from the mat.",
        },
        closing: HomeClosingStrings {
            section_label: "Begin",
            title: "Your practice, your pace.",
            body: "Whether you are stepping onto the mat for the first time or \
                   returning after many seasons away, there is a place for you here.",
            cta_class: "Join a class",
            cta_retreats: "Discover retreats",
        },
    },
    blog: SectionStrings {
        section_label: "Journal",
        title: "Quiet essays for curious hearts.",
        intro: "Reflections from the mat, the cushion, and the spaces in between. \
                Thoughtful notes on rest, ritual, and being gently human.",
        note: "New essays are shared each month.",
    },
    events: SectionStrings {
        section_label: "Events",
        title: "Gatherings for deeper practice.",
        intro: "From lunar ceremonies to foundational workshops, each event is \
                crafted as a gentle doorway into a more spacious way of being.",
        note: "Spaces are limited. Reserve your place via email:",
    },
    retreats: SectionStrings {
        section_label: "Retreats",
        title: "Time out of time.",
        intro: "Our retreats are invitations to step outside ordinary rhythm and \
                remember the simple joy of being alive, supported by nature and \
                community.",
        note: "To receive the full itinerary and pricing, email",
    },
    retreat_detail: RetreatDetailStrings {
        benefits: "Benefits",
        includes: "Includes",
        activities: "Activities",
        preparation: "Preparation",
    },
    retreats_email: "retreats@anantayoga.studio",
};

const ES: UiStrings = UiStrings {
    nav: NavStrings {
        home: "Inicio",
        blog: "Blog",
        events: "Eventos",
        retreats: "Retiros",
    },
    language_label: "Idioma",
    home: HomeStrings {
        hero: HomeHeroStrings {
            kicker: "Yoga · Meditación · Sonido",
            title: "Donde comienza lo infinito.",
            body: "Ananta es un refugio para una práctica curiosa y consciente. Un \
                   estudio donde la respiración se vuelve lenta, el sistema \
                   nervioso se suaviza y cada cuerpo es recibido exactamente como es.",
            cta_schedule: "Ver horario",
            cta_retreats: "Explorar retiros",
            badge1: "Todos los niveles bienvenidos",
            badge2: "Grupos pequeños e íntimos",
            badge3: "Presencial y en línea",
        },
        about: HomeAboutStrings {
            section_label: "El Estudio",
            title: "Enraizado en la tierra. Abierto a lo infinito.",
            body1: "Ananta está diseñado como un altar vivo y respirante a la \
                    quietud. Paredes verde bosque, cojines de lino, madera cálida y \
                    luz de velas invitan al cuerpo a soltar desde el momento en que \
                    llegas. El espacio es íntimo, con aromas suaves y silencioso \
                    por intención: un refugio frente al ruido constante de la ciudad.",
            body2: "Nuestras maestras y maestros honran la tradición y a la vez \
                    hablan con una voz clara y contemporánea. Cada clase es una \
                    invitación a moverte con intención, descansar profundamente y \
                    recordar que no hay nada en ti que necesite arreglarse.",
            card1: "Grupos pequeños de 10–14 personas mantienen cada sesión \
                    espaciosa, personal y cuidadosamente sostenida.",
            card2: "Lenguaje sensible al trauma, secuencias inclusivas y \
                    asistencias opcionales honran los límites de cada cuerpo.",
            card3: "Cuencos de cristal y tibetanos, junto a paisajes sonoros \
                    delicados, acompañan la restauración del sistema nervioso.",
        },
        offerings: HomeOfferingsStrings {
            section_label: "Prácticas",
            title: "Prácticas para cada sistema nervioso.",
            intro: "Muévete, respira o simplemente recuéstate y escucha. Elige el \
                    formato que te acompañe donde estás — por la mañana, al \
                    mediodía o al final del día.",
            yoga: OfferingStrings {
                title: "Rituales de Yoga",
                subtitle: "Vinyasa · Hatha · Restaurativo",
                description: "Secuencias lentas guiadas por la respiración que \
                              cultivan fuerza y movilidad sin prisa. Espera trabajo \
                              en el piso, sostener con intención y una savasana \
                              espaciosa.",
            },
            meditation: OfferingStrings {
                title: "Círculos de Meditación",
                subtitle: "Quietud · Respiración · Indagación",
                description: "Prácticas guiadas que exploran la atención plena, el \
                              mantra y la meditación en silencio. Ideales tanto \
                              para personas nuevas como experimentadas.",
            },
            sound: OfferingStrings {
                title: "Viajes de Sonido",
                subtitle: "Cuencos · Gongs · Voz",
                description: "Baños de sonido inmersivos diseñados para sostener un \
                              descanso profundo y la re-organización energética. Tú \
                              solo te recuestas, recibes y eres sostenida/o.",
            },
        },
        schedule: HomeScheduleStrings {
            section_label: "Ritmo semanal",
            title: "Una semana tejida desde la quietud.",
            full_calendar: "Calendario completo",
            note: "El horario completo, los precios y las membresías están \
                   disponibles en el estudio y por correo electrónico.",
        },
        space: HomeSpaceStrings {
            section_label: "El Espacio",
            title: "Un espacio sagrado, sostenido con suavidad.",
            intro: "Cada textura — lino, ratán, piedra, hoja — se elige para calmar \
                    sentidos sobre-estimulados. Al entrar, siente cómo los hombros \
                    descienden poco a poco.",
        },
        testimonials: HomeTestimonialsStrings {
            section_label: "Voces de la comunidad",
            title: "Historias sobre el tapete.",
        },
        closing: HomeClosingStrings {
            section_label: "Comienza",
            title: "Tu práctica, a tu ritmo.",
            body: "Tanto si pisas el tapete por primera vez como si regresas \
                   después de muchas temporadas, aquí hay un lugar para ti.",
            cta_class: "Unirte a una clase",
            cta_retreats: "Descubrir retiros",
        },
    },
    blog: SectionStrings {
        section_label: "Diario",
        title: "Ensayos silenciosos para corazones curiosos.",
        intro: "Reflexiones desde el tapete, el cojín y los espacios intermedios. \
                Notas cuidadosas sobre el descanso, el ritual y el arte de ser \
                humanas/os con suavidad.",
        note: "Publicamos nuevos textos cada mes.",
    },
    events: SectionStrings {
        section_label: "Eventos",
        title: "Encuentros para profundizar la práctica.",
        intro: "Desde ceremonias lunares hasta talleres de fundamentos, cada \
                evento es una puerta suave hacia una forma de estar más espaciosa.",
        note: "Los cupos son limitados. Reserva tu lugar por correo:",
    },
    retreats: SectionStrings {
        section_label: "Retiros",
        title: "Tiempo fuera del tiempo.",
        intro: "Nuestros retiros son invitaciones a salir del ritmo ordinario y \
                recordar la alegría simple de estar viva/o, sostenida/o por la \
                naturaleza y la comunidad.",
        note: "Para recibir el itinerario completo y los precios, escribe a",
    },
    retreat_detail: RetreatDetailStrings {
        benefits: "Beneficios",
        includes: "Incluye",
        activities: "Actividades",
        preparation: "Preparación",
    },
    retreats_email: "retreats@anantayoga.studio",
};

/// Returns the static UI strings for the given language.
pub fn ui_strings(lang: Lang) -> &'static UiStrings {
    match lang {
        Lang::En => &EN,
        Lang::Es => &ES,
    }
}
