//! UI languages and their string tables.

use std::str::FromStr;

/// Supported UI languages, identified by BCP 47 code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    EsEs,
    EnUs,
    ItIt,
    FrFr,
    DeDe,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 5] = [
        Language::EsEs,
        Language::EnUs,
        Language::ItIt,
        Language::FrFr,
        Language::DeDe,
    ];

    /// Returns the language code, e.g. `"es-ES"`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
            Language::ItIt => "it-IT",
            Language::FrFr => "fr-FR",
            Language::DeDe => "de-DE",
        }
    }

    /// Returns the language's own name for itself.
    pub fn label(&self) -> &'static str {
        match self {
            Language::EsEs => "Español",
            Language::EnUs => "English",
            Language::ItIt => "Italiano",
            Language::FrFr => "Français",
            Language::DeDe => "Deutsch",
        }
    }

    /// Returns the next language in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the string table for this language.
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::EsEs => &ES,
            Language::EnUs => &EN,
            Language::ItIt => &IT,
            Language::FrFr => &FR,
            Language::DeDe => &DE,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| format!("unknown language {s:?}"))
    }
}

/// Every user-facing label the storefront shows.
#[derive(Debug)]
pub struct Strings {
    pub menu: &'static str,
    pub order: &'static str,
    pub empty_order: &'static str,
    pub pizzas: &'static str,
    pub starters: &'static str,
    pub drinks: &'static str,
    pub desserts: &'static str,
    pub discount_percent: &'static str,
    pub tip_percent: &'static str,
    pub other: &'static str,
    pub save_order: &'static str,
    pub subtotal: &'static str,
    pub discount: &'static str,
    pub tip: &'static str,
    pub total: &'static str,
    pub quantity: &'static str,
    pub ticket_header: &'static str,
    pub sales_ticket: &'static str,
    pub ticket_number: &'static str,
    pub thank_you: &'static str,
    pub order_confirmed: &'static str,
    pub order_number: &'static str,
    pub back_to_menu: &'static str,
}

const ES: Strings = Strings {
    menu: "Menú",
    order: "Pedido",
    empty_order: "La orden está vacía",
    pizzas: "Pizzas",
    starters: "Entrantes",
    drinks: "Bebidas",
    desserts: "Postres",
    discount_percent: "Porcentaje de descuento",
    tip_percent: "Porcentaje de propina",
    other: "Otro",
    save_order: "Guardar orden",
    subtotal: "Subtotal",
    discount: "Descuento",
    tip: "Propina",
    total: "Total",
    quantity: "x",
    ticket_header: "PIZZERÍA TIPIFY",
    sales_ticket: "Ticket de venta",
    ticket_number: "Ticket n.º ",
    thank_you: "¡Gracias por su visita!",
    order_confirmed: "Orden confirmada",
    order_number: "Número de orden",
    back_to_menu: "Volver al menú",
};

const EN: Strings = Strings {
    menu: "Menu",
    order: "Order",
    empty_order: "The order is empty",
    pizzas: "Pizzas",
    starters: "Starters",
    drinks: "Drinks",
    desserts: "Desserts",
    discount_percent: "Discount percentage",
    tip_percent: "Tip percentage",
    other: "Other",
    save_order: "Save order",
    subtotal: "Subtotal",
    discount: "Discount",
    tip: "Tip",
    total: "Total",
    quantity: "x",
    ticket_header: "TIPIFY PIZZERIA",
    sales_ticket: "Sales ticket",
    ticket_number: "Ticket #",
    thank_you: "Thank you for your visit!",
    order_confirmed: "Order confirmed",
    order_number: "Order number",
    back_to_menu: "Back to menu",
};

const IT: Strings = Strings {
    menu: "Menù",
    order: "Ordine",
    empty_order: "L'ordine è vuoto",
    pizzas: "Pizze",
    starters: "Antipasti",
    drinks: "Bevande",
    desserts: "Dolci",
    discount_percent: "Percentuale di sconto",
    tip_percent: "Percentuale di mancia",
    other: "Altro",
    save_order: "Salva ordine",
    subtotal: "Subtotale",
    discount: "Sconto",
    tip: "Mancia",
    total: "Totale",
    quantity: "x",
    ticket_header: "PIZZERIA TIPIFY",
    sales_ticket: "Scontrino di vendita",
    ticket_number: "Scontrino n. ",
    thank_you: "Grazie per la visita!",
    order_confirmed: "Ordine confermato",
    order_number: "Numero d'ordine",
    back_to_menu: "Torna al menù",
};

const FR: Strings = Strings {
    menu: "Menu",
    order: "Commande",
    empty_order: "La commande est vide",
    pizzas: "Pizzas",
    starters: "Entrées",
    drinks: "Boissons",
    desserts: "Desserts",
    discount_percent: "Pourcentage de remise",
    tip_percent: "Pourcentage de pourboire",
    other: "Autre",
    save_order: "Enregistrer la commande",
    subtotal: "Sous-total",
    discount: "Remise",
    tip: "Pourboire",
    total: "Total",
    quantity: "x",
    ticket_header: "PIZZERIA TIPIFY",
    sales_ticket: "Ticket de vente",
    ticket_number: "Ticket n° ",
    thank_you: "Merci de votre visite !",
    order_confirmed: "Commande confirmée",
    order_number: "Numéro de commande",
    back_to_menu: "Retour au menu",
};

const DE: Strings = Strings {
    menu: "Speisekarte",
    order: "Bestellung",
    empty_order: "Die Bestellung ist leer",
    pizzas: "Pizzen",
    starters: "Vorspeisen",
    drinks: "Getränke",
    desserts: "Nachspeisen",
    discount_percent: "Rabatt in Prozent",
    tip_percent: "Trinkgeld in Prozent",
    other: "Andere",
    save_order: "Bestellung speichern",
    subtotal: "Zwischensumme",
    discount: "Rabatt",
    tip: "Trinkgeld",
    total: "Gesamt",
    quantity: "x",
    ticket_header: "PIZZERIA TIPIFY",
    sales_ticket: "Verkaufsbeleg",
    ticket_number: "Beleg-Nr. ",
    thank_you: "Danke für Ihren Besuch!",
    order_confirmed: "Bestellung bestätigt",
    order_number: "Bestellnummer",
    back_to_menu: "Zurück zur Speisekarte",
};
