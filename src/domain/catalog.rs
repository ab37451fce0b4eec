//! Static catalogs: select-list options and per-domain demo tables.

/// Diploma titles offered by the diploma title select.
pub const DIPLOMA_TITLES: &[&str] = &[
    "Licence en Informatique",
    "Master en Informatique",
    "Doctorat en Informatique",
    "Licence en Mathématiques",
    "Master en Mathématiques",
    "Certificat de Développement Web",
];

/// Diploma levels, lowest first.
pub const DIPLOMA_LEVELS: &[&str] = &["Certificat", "Licence", "Maîtrise", "Master", "Doctorat"];

pub const EXPERIENCE_TITLES: &[&str] = &[
    "Professeur d'Informatique",
    "Formateur Web",
    "Data Scientist",
    "Chercheur",
];

pub const COMPANIES: &[&str] = &[
    "École 42",
    "Sorbonne Université",
    "Polytechnique",
    "HEC Paris",
    "Université de Lyon",
    "Université de Toulouse",
    "Autre",
];

pub const FIRST_NAMES: &[&str] = &[
    "Camille", "Lucas", "Léa", "Hugo", "Chloé", "Louis", "Manon", "Nathan", "Inès", "Julien",
    "Sarah", "Thomas",
];

pub const LAST_NAMES: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Durand", "Lefebvre", "Moreau", "Laurent", "Girard", "Roux",
    "Fournier", "Mercier", "Lambert",
];

pub const CITIES: &[&str] = &[
    "Paris",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Bordeaux",
    "Lille",
    "Nantes",
    "Strasbourg",
    "Montpellier",
    "Rennes",
];

/// One subject-matter category used to build a coherent random profile.
#[derive(Debug, PartialEq, Eq)]
pub struct SubjectDomain {
    pub name: &'static str,
    pub description: &'static str,
    /// `(title, level)` pairs
    pub diplomas: &'static [(&'static str, &'static str)],
    pub experience_titles: &'static [&'static str],
    pub companies: &'static [&'static str],
    pub course_titles: &'static [&'static str],
    pub course_description: &'static str,
}

pub const DOMAINS: &[SubjectDomain] = &[
    SubjectDomain {
        name: "informatique",
        description: "Enseignant passionné de programmation et de développement web, \
                      spécialisé en Python, Java et React.",
        diplomas: &[
            ("Licence en Informatique", "Licence"),
            ("Master en Informatique", "Master"),
            ("Doctorat en Informatique", "Doctorat"),
            ("Certificat de Développement Web", "Certificat"),
        ],
        experience_titles: &[
            "Professeur d'Informatique",
            "Formateur Web",
            "Développeur Full-Stack",
            "Data Scientist",
        ],
        companies: &["École 42", "Télécom Paris", "CentraleSupélec", "Capgemini", "OpenClassrooms"],
        course_titles: &[
            "Introduction à Python",
            "Développement web avec React",
            "Programmation orientée objet en Java",
            "Bases de données SQL",
            "Initiation à l'IA",
        ],
        course_description: "Cours pratique de programmation et de développement logiciel \
                             avec projets guidés.",
    },
    SubjectDomain {
        name: "maths",
        description: "Professeur de mathématiques rigoureux, à l'aise en algèbre, analyse \
                      et probabilités.",
        diplomas: &[
            ("Licence en Mathématiques", "Licence"),
            ("Master en Mathématiques", "Master"),
            ("Agrégation de Mathématiques", "Maîtrise"),
            ("Doctorat en Mathématiques Appliquées", "Doctorat"),
        ],
        experience_titles: &[
            "Professeur de Mathématiques",
            "Chargé de TD en Analyse",
            "Statisticien",
            "Chercheur",
        ],
        companies: &["ENS", "Sorbonne Université", "Polytechnique", "Lycée Henri-IV", "INSEE"],
        course_titles: &[
            "Algèbre linéaire",
            "Analyse réelle",
            "Probabilités et statistiques",
            "Géométrie euclidienne",
        ],
        course_description: "Cours de mathématiques couvrant calcul, modélisation et \
                             résolution de problèmes.",
    },
    SubjectDomain {
        name: "français",
        description: "Enseignante de lettres attachée à la littérature, à la grammaire et \
                      à l'expression écrite.",
        diplomas: &[
            ("Licence de Lettres Modernes", "Licence"),
            ("Master de Littérature Française", "Master"),
            ("CAPES de Lettres", "Maîtrise"),
            ("Certificat de FLE", "Certificat"),
        ],
        experience_titles: &[
            "Professeur de Français",
            "Correctrice éditoriale",
            "Animatrice d'atelier d'écriture",
        ],
        companies: &["Sorbonne Université", "Alliance Française", "Lycée Louis-le-Grand", "Gallimard"],
        course_titles: &[
            "Littérature du XIXe siècle",
            "Grammaire et orthographe",
            "Rédaction et expression écrite",
            "Analyse de textes",
        ],
        course_description: "Cours de langue et de littérature française axé sur la \
                             rédaction et l'analyse.",
    },
    SubjectDomain {
        name: "physique",
        description: "Physicien pédagogue, spécialiste de mécanique, d'électricité et \
                      d'optique.",
        diplomas: &[
            ("Licence de Physique", "Licence"),
            ("Master de Physique Fondamentale", "Master"),
            ("Doctorat en Physique", "Doctorat"),
        ],
        experience_titles: &[
            "Professeur de Physique",
            "Ingénieur de recherche",
            "Chercheur",
        ],
        companies: &["CNRS", "CEA", "Polytechnique", "Université de Grenoble"],
        course_titles: &[
            "Mécanique newtonienne",
            "Électricité et magnétisme",
            "Thermodynamique",
            "Optique ondulatoire",
        ],
        course_description: "Cours de physique alliant théorie et expériences en \
                             mécanique et électricité.",
    },
    SubjectDomain {
        name: "chimie",
        description: "Chimiste expérimentée, passionnée par les molécules et les \
                      réactions chimiques.",
        diplomas: &[
            ("Licence de Chimie", "Licence"),
            ("Master de Chimie Organique", "Master"),
            ("Doctorat en Chimie", "Doctorat"),
            ("Certificat d'Hygiène et Sécurité en Laboratoire", "Certificat"),
        ],
        experience_titles: &[
            "Professeur de Chimie",
            "Chimiste en laboratoire",
            "Responsable qualité",
        ],
        companies: &["Sanofi", "CNRS", "L'Oréal", "Université de Strasbourg"],
        course_titles: &[
            "Chimie organique",
            "Réactions et équilibres chimiques",
            "Structure de la matière",
        ],
        course_description: "Cours de chimie générale et organique avec travaux pratiques \
                             en laboratoire.",
    },
    SubjectDomain {
        name: "histoire",
        description: "Historien curieux des civilisations, de la géographie et des \
                      sociétés politiques.",
        diplomas: &[
            ("Licence d'Histoire", "Licence"),
            ("Master d'Histoire Contemporaine", "Master"),
            ("Agrégation d'Histoire", "Maîtrise"),
            ("Doctorat en Histoire", "Doctorat"),
        ],
        experience_titles: &[
            "Professeur d'Histoire-Géographie",
            "Guide conférencier",
            "Archiviste",
        ],
        companies: &["Sorbonne Université", "Musée du Louvre", "Archives nationales", "ENS"],
        course_titles: &[
            "Histoire de la Révolution française",
            "Civilisations antiques",
            "Géopolitique contemporaine",
            "Histoire de l'Europe au XXe siècle",
        ],
        course_description: "Cours d'histoire retraçant les civilisations, la culture et \
                             la politique des sociétés.",
    },
];

/// Look up a domain by name (exact match).
pub fn find_domain(name: &str) -> Option<&'static SubjectDomain> {
    DOMAINS.iter().find(|domain| domain.name == name)
}
