//! Static message catalogs for the supported interface languages.

use terminal_contract::Lang;
use terminal_core::{i18n::lookup, Translator};

/// Placeholder replaced by a rendered element in rich messages.
pub const RICH_SLOT_CMD: &str = "{cmd}";

const EN: &[(&str, &str)] = &[
    ("visitor", "visitor"),
    ("autocomplete", "Autocomplete:"),
    ("noMatch", "No matching command"),
    ("unknownCmdErr", "Unknown command"),
    ("cmds.build-info.description", "Show when this site was built and where it is published"),
    ("cmds.build-info.title", "Build information"),
    ("cmds.build-info.time", "Build time"),
    ("cmds.build-info.ipns", "IPNS name"),
    ("cmds.build-info.unknown", "Unknown"),
    ("cmds.build-info.unconfigured", "Not configured"),
    ("cmds.clear.description", "Clear the terminal"),
    ("cmds.contact.description", "Ways to get in touch"),
    ("cmds.contact.body", "Open an issue or send a message on any of the profiles below."),
    ("cmds.contribs.description", "Open source contributions"),
    ("cmds.contribs.body", "A selection of projects I have contributed to."),
    ("cmds.help.description", "List the available commands"),
    ("cmds.intro.description", "Show the introduction again"),
    ("cmds.intro.welcome", "Welcome to my corner of the web."),
    ("cmds.intro.site_intro_1", "This site works like a terminal."),
    ("cmds.intro.site_intro_2", "Type {cmd} to see what you can do here."),
    ("cmds.set-lang.description", "Change the interface language"),
    ("cmds.set-lang.applied", "Language set to"),
    ("cmds.set-lang.unsupported", "Unsupported language"),
    ("cmds.set-lang.missing", "Pick a language"),
    ("cmds.web2work.description", "Web2 work experience"),
    ("cmds.web2work.body", "Backend and frontend roles across product teams."),
    ("cmds.web3work.description", "Web3 work experience"),
    ("cmds.web3work.body", "Peer-to-peer and decentralized infrastructure projects."),
    ("cmds.whoami.description", "About me"),
    ("cmds.whoami.body", "Software developer building tools for an open web."),
];

const FR: &[(&str, &str)] = &[
    ("visitor", "visiteur"),
    ("autocomplete", "Autocomplétion :"),
    ("noMatch", "Aucune commande correspondante"),
    ("unknownCmdErr", "Commande inconnue"),
    ("cmds.build-info.description", "Afficher la date de build et l'adresse de publication"),
    ("cmds.build-info.title", "Informations de build"),
    ("cmds.build-info.time", "Date du build"),
    ("cmds.build-info.ipns", "Nom IPNS"),
    ("cmds.build-info.unknown", "Inconnue"),
    ("cmds.build-info.unconfigured", "Non configuré"),
    ("cmds.clear.description", "Effacer le terminal"),
    ("cmds.contact.description", "Me contacter"),
    ("cmds.contact.body", "Ouvrez une issue ou écrivez-moi sur l'un des profils ci-dessous."),
    ("cmds.contribs.description", "Contributions open source"),
    ("cmds.contribs.body", "Une sélection de projets auxquels j'ai contribué."),
    ("cmds.help.description", "Lister les commandes disponibles"),
    ("cmds.intro.description", "Revoir l'introduction"),
    ("cmds.intro.welcome", "Bienvenue dans mon coin du web."),
    ("cmds.intro.site_intro_1", "Ce site fonctionne comme un terminal."),
    ("cmds.intro.site_intro_2", "Tapez {cmd} pour voir ce que vous pouvez faire ici."),
    ("cmds.set-lang.description", "Changer la langue de l'interface"),
    ("cmds.set-lang.applied", "Langue définie sur"),
    ("cmds.set-lang.unsupported", "Langue non prise en charge"),
    ("cmds.set-lang.missing", "Choisissez une langue"),
    ("cmds.web2work.description", "Expériences Web2"),
    ("cmds.web2work.body", "Postes backend et frontend au sein d'équipes produit."),
    ("cmds.web3work.description", "Expériences Web3"),
    ("cmds.web3work.body", "Projets d'infrastructure pair-à-pair et décentralisée."),
    ("cmds.whoami.description", "À propos de moi"),
    ("cmds.whoami.body", "Développeur construisant des outils pour un web ouvert."),
];

/// [`Translator`] backed by the built-in catalog for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    lang: Lang,
}

impl Catalog {
    /// Creates a catalog for `lang`.
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self.lang {
            Lang::En => EN,
            Lang::Fr => FR,
        }
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        lookup(self.table(), key)
    }
}

/// Splits a rich message around [`RICH_SLOT_CMD`].
///
/// Returns the text before and after the slot, or `None` when the message has no slot.
pub fn split_rich(message: &str) -> Option<(&str, &str)> {
    message.split_once(RICH_SLOT_CMD)
}
