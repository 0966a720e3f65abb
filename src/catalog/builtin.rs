use super::CategoryDef;

/// Built-in categories, ascending by ordinal.
pub static BUILTIN_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        ordinal: 1,
        name: "Global API Changes",
        weight: 2,
        rules: &[
            r"Vue\.extend",
            r"Vue\.nextTick",
            r"Vue\.set",
            r"Vue\.delete",
            r"Vue\.directive",
            r"Vue\.filter",
            r"Vue\.component",
            r"Vue\.use",
            r"Vue\.mixin",
        ],
    },
    CategoryDef {
        ordinal: 2,
        name: "v-model Behavior",
        weight: 2,
        rules: &[
            r"v-bind:value",
            r"v-bind\.sync",
            r"@input",
            r#"\$emit\(['"]input['"]"#,
        ],
    },
    CategoryDef {
        ordinal: 3,
        name: "Key Modifiers",
        weight: 1,
        rules: &[
            r"v-on:keyup\.\d+",
            r"v-on:keydown\.\d+",
            r"@keyup\.\d+",
            r"@keydown\.\d+",
        ],
    },
    CategoryDef {
        ordinal: 4,
        name: "Event Bus",
        weight: 2,
        rules: &[
            r"\$on\(",
            r"\$off\(",
            r"\$once\(",
            r"(?s)new Vue\(\).*(?:\$emit|\$on|\$off|\$once)",
        ],
    },
    CategoryDef {
        ordinal: 5,
        name: "Filters",
        weight: 1,
        rules: &[r"\|\s*[a-zA-Z]", r"Vue\.filter\(", r"filters:\s*\{"],
    },
    CategoryDef {
        ordinal: 6,
        name: "Scoped Slots",
        weight: 1,
        rules: &[r"slot=", r"slot-scope=", r"v-slot:"],
    },
    CategoryDef {
        ordinal: 7,
        name: "Lifecycle Hooks",
        weight: 1,
        rules: &[r"beforeDestroy", r"destroyed"],
    },
    CategoryDef {
        ordinal: 8,
        name: "Vue.set and Vue.delete",
        weight: 1,
        rules: &[r"Vue\.set\(", r"Vue\.delete\(", r"\$set\(", r"\$delete\("],
    },
    CategoryDef {
        ordinal: 9,
        name: "Webpack Config",
        weight: 3,
        rules: &[
            r"vue\.config\.js",
            r"webpack\.config\.js",
            r"chainWebpack",
            r"configureWebpack",
        ],
    },
    CategoryDef {
        ordinal: 10,
        name: "Plugin Usage",
        weight: 2,
        rules: &[r"Vue\.use\("],
    },
    CategoryDef {
        ordinal: 11,
        name: "Router/Vuex",
        weight: 2,
        rules: &[
            r"new Router\(",
            r"new Vuex\.Store\(",
            r"Vue\.prototype\.\$router",
            r"Vue\.prototype\.\$store",
        ],
    },
];
