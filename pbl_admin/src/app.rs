use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Redirect, Route, Router, Routes, A},
    path,
};

use crate::{
    api::ApiClient,
    components::snackbar::Snackbar,
    config::AppConfig,
    pages::{
        access_types_page::AccessTypesPage, educators_page::EducatorsPage,
        pbl_files_page::PblFilesPage, schools_page::SchoolsPage,
        unregistered_page::UnregisteredPage,
    },
    services::access_type::AccessTypeStore,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    provide_context(ApiClient::new(config.api_base.clone()));
    provide_context(AccessTypeStore::seeded());
    provide_context(config);

    view! {
        <Title text="PBL Admin" />

        <Router>
            <Snackbar>
                <nav class="flex flex-row p-1 gap-1 items-center">
                    <span class="text-lg p-2">PBL Admin</span>
                    <div class="flex flex-row flex-1 items-center justify-end gap-1">
                        <A href="/educators">
                            <span class="bg-gray-900 hover:bg-gray-700 md:cursor-pointer rounded-md p-2">
                                Educators
                            </span>
                        </A>
                        <A href="/schools">
                            <span class="bg-gray-900 hover:bg-gray-700 md:cursor-pointer rounded-md p-2">
                                Schools
                            </span>
                        </A>
                        <A href="/files">
                            <span class="bg-gray-900 hover:bg-gray-700 md:cursor-pointer rounded-md p-2">
                                PBL files
                            </span>
                        </A>
                        <A href="/access-types">
                            <span class="bg-gray-900 hover:bg-gray-700 md:cursor-pointer rounded-md p-2">
                                Access types
                            </span>
                        </A>
                        <A href="/unregistered">
                            <span class="bg-gray-900 hover:bg-gray-700 md:cursor-pointer rounded-md p-2">
                                Unregistered
                            </span>
                        </A>
                    </div>
                </nav>
                <main class="flex flex-1 flex-col overflow-auto">
                    <Routes fallback=|| "There is no such page".into_view()>
                        <Route path=path!("/educators") view=EducatorsPage />
                        <Route path=path!("/schools") view=SchoolsPage />
                        <Route path=path!("/files") view=PblFilesPage />
                        <Route path=path!("/access-types") view=AccessTypesPage />
                        <Route path=path!("/unregistered") view=UnregisteredPage />
                        <Route path=path!("/") view=|| view! { <Redirect path="/educators" /> } />
                    </Routes>
                </main>
            </Snackbar>
        </Router>
    }
}
