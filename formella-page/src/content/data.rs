// data.rs - Page text
//
// Italian copy for the Ghiberti panel page, in render order.

use super::Inline::{Strong as B, Text as T};
use super::{
    Block, Card, Comparison, ComparisonColumn, Footer, Heading, Icon, ModelViewer, Page, Point,
    Section, Theme,
};
use crate::config::DEFAULT_MODEL_SRC;

pub const PAGE: Page = Page {
    title: "La Formella di Lorenzo Ghiberti",
    lang: "it",
    sections: &[HERO, INTRODUZIONE, OPERA, CONFRONTO, ANALISI, MODELLO3D],
    footer: Footer {
        author: "Marco Ceriani",
        period: "Anno scolastico 2024/2025",
        caption: "Approfondimento didattico sulla Formella di Lorenzo Ghiberti",
    },
};

const HERO: Section = Section {
    id: "hero",
    theme: Theme::Hero,
    heading: Heading::Hero {
        lead: "La Formella di",
        highlight: "Lorenzo Ghiberti",
        tagline: "Il capolavoro che segnò l'inizio del Rinascimento italiano",
    },
    blocks: &[],
};

const INTRODUZIONE: Section = Section {
    id: "introduzione",
    theme: Theme::Plain,
    heading: Heading::Title { text: "Il Concorso del 1401", intro: None },
    blocks: &[
        Block::Paragraph(&[
            T("Nel "),
            B("1401"),
            T(", l'Arte di Calimala, potente corporazione mercantile fiorentina, \
               bandì un concorso pubblico per realizzare la seconda porta bronzea del \
               Battistero di San Giovanni a Firenze. L'evento rappresentò un momento \
               cruciale nella storia dell'arte italiana, segnando la transizione dal \
               gotico al Rinascimento."),
        ]),
        Block::Paragraph(&[
            T("Il tema proposto era il "),
            B("Sacrificio di Isacco"),
            T(", episodio biblico che richiedeva grande abilità nel rappresentare \
               drammaticità, composizione e tecnica scultorea. Tra i sette artisti \
               partecipanti, emersero due nomi destinati a lasciare un'impronta \
               indelebile nella storia dell'arte: "),
            B("Lorenzo Ghiberti"),
            T(" e "),
            B("Filippo Brunelleschi"),
            T("."),
        ]),
        Block::Callout(Card {
            icon: Some(Icon::Users),
            title: "Lorenzo Ghiberti (1378-1455)",
            body: &[&[T(
                "Orafo e scultore fiorentino, Ghiberti fu un maestro della fusione a \
                 cera persa. La sua vittoria nel concorso del 1401 lo consacrò come uno \
                 dei più grandi artisti del primo Rinascimento. Dedicò gran parte della \
                 sua vita alla realizzazione delle porte del Battistero, che Michelangelo \
                 definirà \"Porte del Paradiso\".",
            )]],
        }),
    ],
};

const OPERA: Section = Section {
    id: "opera",
    theme: Theme::Muted,
    heading: Heading::Title { text: "Descrizione dell'Opera", intro: None },
    blocks: &[
        Block::Cards(&[
            Card {
                icon: Some(Icon::Columns),
                title: "Tecnica e Materiali",
                body: &[&[
                    T("La formella è realizzata in "),
                    B("bronzo dorato"),
                    T(" con la tecnica della fusione a cera persa. Misura circa "),
                    B("45 x 38 cm"),
                    T(" e presenta una cornice a quadrifoglio gotica. Ghiberti dimostrò \
                       straordinaria maestria nella lavorazione del metallo, creando \
                       diverse profondità di rilievo."),
                ]],
            },
            Card {
                icon: Some(Icon::Eye),
                title: "Composizione",
                body: &[&[T(
                    "La scena si svolge su più livelli: in primo piano Abramo e Isacco \
                     sull'altare, in secondo piano i due servitori con l'asino, in alto \
                     l'angelo che ferma il sacrificio. L'equilibrio compositivo crea un \
                     senso di armonia e naturalezza.",
                )]],
            },
        ]),
        Block::Paragraph(&[
            T("Il "),
            B("soggetto biblico"),
            T(" narra il momento in cui Dio ordina ad Abramo di sacrificare suo figlio \
               Isacco per metterne alla prova la fede. Nell'istante culminante, quando \
               Abramo sta per colpire, un angelo interviene fermando il suo braccio."),
        ]),
        Block::Paragraph(&[
            T("Ghiberti rappresenta questo momento drammatico con "),
            B("eleganza e armonia"),
            T(". Le figure sono snelle e proporzionate, i gesti naturali, le vesti \
               fluide. La composizione è bilanciata: ogni elemento occupa il proprio \
               spazio senza sovrapposizioni caotiche."),
        ]),
    ],
};

const CONFRONTO: Section = Section {
    id: "confronto",
    theme: Theme::Plain,
    heading: Heading::Title { text: "Confronto con Brunelleschi", intro: None },
    blocks: &[Block::Comparison(Comparison {
        columns: &[
            ComparisonColumn {
                artist: "Ghiberti",
                accent: true,
                points: &[
                    Point { label: "Armonia ed eleganza", text: "composizione equilibrata e fluida" },
                    Point { label: "Bellezza idealizzata", text: "figure proporzionate e aggraziate" },
                    Point { label: "Spazi definiti", text: "ogni elemento ha il suo luogo preciso" },
                    Point { label: "Economicità", text: "fusione in unico pezzo, minor costo" },
                    Point { label: "Tecnica raffinata", text: "superficie levigata e dettagliata" },
                ],
            },
            ComparisonColumn {
                artist: "Brunelleschi",
                accent: false,
                points: &[
                    Point { label: "Drammaticità intensa", text: "pathos e tensione emotiva" },
                    Point { label: "Realismo crudo", text: "corpi muscolosi e anatomicamente precisi" },
                    Point { label: "Dinamismo", text: "movimento violento e improvviso" },
                    Point { label: "Fusione multipla", text: "elementi assemblati separatamente" },
                    Point { label: "Innovazione prospettica", text: "primi esperimenti di profondità" },
                ],
            },
        ],
        verdict: &[
            B("La vittoria di Ghiberti"),
            T(" fu determinata dalla sua capacità di coniugare innovazione tecnica, \
               equilibrio compositivo ed eleganza formale. La giuria apprezzò la \
               raffinatezza esecutiva e l'economia del progetto, preferendolo alla \
               drammaticità più cruda di Brunelleschi."),
        ],
    })],
};

const ANALISI: Section = Section {
    id: "analisi",
    theme: Theme::Muted,
    heading: Heading::Title { text: "Analisi Artistica", intro: None },
    blocks: &[
        Block::Panel(Card {
            icon: Some(Icon::Lightbulb),
            title: "Stile e Innovazione",
            body: &[
                &[
                    T("Ghiberti si pone come "),
                    B("ponte tra Gotico e Rinascimento"),
                    T(". Mantiene la cornice gotica a quadrifoglio e l'eleganza lineare \
                       tardogotica, ma introduce elementi innovativi tipicamente \
                       rinascimentali."),
                ],
                &[
                    T("Le figure presentano "),
                    B("proporzioni classiche"),
                    T(" ispirate all'arte greco-romana. Il corpo di Isacco ricorda le \
                       sculture antiche: anatomia accurata, equilibrio posturale, \
                       idealizzazione della bellezza fisica."),
                ],
            ],
        }),
        Block::Panel(Card {
            icon: None,
            title: "Prospettiva e Spazio",
            body: &[
                &[
                    T("Uno degli aspetti più innovativi è l'uso della "),
                    B("prospettiva empirica"),
                    T(". Ghiberti crea diversi piani di profondità attraverso il rilievo \
                       graduato: altorilievo per le figure principali, bassorilievo per \
                       gli elementi secondari."),
                ],
                &[
                    T("Lo sfondo roccioso e il paesaggio creano un senso di "),
                    B("profondità spaziale"),
                    T(" che anticipa le ricerche prospettiche che Brunelleschi svilupperà \
                       sistematicamente negli anni successivi."),
                ],
            ],
        }),
        Block::Panel(Card {
            icon: None,
            title: "Luce e Superficie",
            body: &[
                &[
                    T("La "),
                    B("doratura"),
                    T(" del bronzo non è solo decorativa, ma funzionale. La superficie \
                       dorata riflette la luce in modo variabile a seconda del rilievo, \
                       creando effetti chiaroscurali naturali che accentuano volumi e \
                       profondità."),
                ],
                &[T(
                    "Ghiberti leviga e rifinisce ogni dettaglio con precisione orafa: dai \
                     riccioli dei capelli alle pieghe delle vesti, fino alle texture \
                     dell'altare e del paesaggio roccioso.",
                )],
            ],
        }),
        Block::Callout(Card {
            icon: None,
            title: "Eredità e Significato",
            body: &[&[
                T("La formella di Ghiberti rappresenta "),
                B("l'inizio ufficiale del Rinascimento"),
                T(" nella scultura italiana. La sua vittoria nel concorso del 1401 segnò \
                   il trionfo di una nuova concezione artistica basata su armonia, \
                   proporzione, studio dell'antico e innovazione tecnica. Questo \
                   capolavoro aprì la strada a generazioni di artisti che avrebbero \
                   rivoluzionato l'arte occidentale."),
            ]],
        }),
    ],
};

const MODELLO3D: Section = Section {
    id: "modello3d",
    theme: Theme::Dark,
    heading: Heading::Title {
        text: "Esplora il Modello 3D",
        intro: Some(
            "Interagisci con il modello tridimensionale: ruota, ingrandisci e osserva \
             ogni dettaglio della formella",
        ),
    },
    blocks: &[Block::ModelViewer(ModelViewer {
        src: DEFAULT_MODEL_SRC,
        alt: "Formella del Sacrificio di Isacco - Lorenzo Ghiberti",
        camera_controls: true,
        auto_rotate: true,
        shadow_intensity: 1.0,
        exposure: 1.2,
        height_px: 600,
    })],
};
