//! The static shop catalog, compiled into the client.
//!
//! Sections group categories, categories group items. Item ids are unique
//! across the whole catalog; lookup by id happens only at purchase time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [Item],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub name: &'static str,
    pub categories: &'static [Category],
}

pub const CATALOG: &[Section] = &[
    Section {
        id: "disposables",
        name: "Disposables",
        categories: &[
            Category {
                name: "HQD",
                items: &[
                    Item {
                        id: "hqd_cuvie",
                        name: "HQD Cuvie",
                        price: 100,
                        description: "Compact model",
                    },
                    Item {
                        id: "hqd_cuvie_plus",
                        name: "HQD Cuvie Plus",
                        price: 150,
                        description: "Larger volume",
                    },
                ],
            },
            Category {
                name: "ELF BAR",
                items: &[
                    Item {
                        id: "elf_bar_600",
                        name: "ELF BAR 600",
                        price: 120,
                        description: "Classic model",
                    },
                    Item {
                        id: "elf_bar_1500",
                        name: "ELF BAR 1500",
                        price: 200,
                        description: "Larger capacity",
                    },
                ],
            },
        ],
    },
    Section {
        id: "liquids",
        name: "Liquids",
        categories: &[
            Category {
                name: "Nicotine salt",
                items: &[
                    Item {
                        id: "salt_25",
                        name: "Salt 25mg",
                        price: 80,
                        description: "Strong salt liquid",
                    },
                    Item {
                        id: "salt_20",
                        name: "Salt 20mg",
                        price: 70,
                        description: "Medium strength",
                    },
                ],
            },
            Category {
                name: "Freebase nicotine",
                items: &[
                    Item {
                        id: "classic_6",
                        name: "Classic 6mg",
                        price: 50,
                        description: "Light strength",
                    },
                    Item {
                        id: "classic_12",
                        name: "Classic 12mg",
                        price: 60,
                        description: "Medium strength",
                    },
                ],
            },
        ],
    },
    Section {
        id: "accessories",
        name: "Accessories",
        categories: &[
            Category {
                name: "Cartridges",
                items: &[
                    Item {
                        id: "cart_standard",
                        name: "Standard cartridge",
                        price: 30,
                        description: "Universal cartridge",
                    },
                    Item {
                        id: "cart_mesh",
                        name: "Mesh cartridge",
                        price: 40,
                        description: "Improved flavor",
                    },
                ],
            },
            Category {
                name: "Coils",
                items: &[
                    Item {
                        id: "coil_regular",
                        name: "Regular coil",
                        price: 20,
                        description: "Base model",
                    },
                    Item {
                        id: "coil_mesh",
                        name: "Mesh coil",
                        price: 25,
                        description: "Improved model",
                    },
                ],
            },
        ],
    },
];

/// Iterates every item in the catalog, section by section.
pub fn all_items() -> impl Iterator<Item = &'static Item> {
    CATALOG
        .iter()
        .flat_map(|section| section.categories)
        .flat_map(|category| category.items)
}

/// Looks up an item by its catalog-wide unique id.
pub fn find_item(item_id: &str) -> Option<&'static Item> {
    all_items().find(|item| item.id == item_id)
}
