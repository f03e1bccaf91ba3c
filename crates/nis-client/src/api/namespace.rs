use crate::client::NisApi;
use crate::request::Call;
use crate::routes::{self, DEFAULT_PAGE_SIZE};

/// Namespace and mosaic definition lookups.
pub struct Namespace<'a, C> {
    client: &'a C,
}

impl<'a, C: NisApi> Namespace<'a, C> {
    pub(crate) fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn prefix(&self) -> &'static str {
        routes::NAMESPACE_PREFIX
    }

    /// Root namespaces, newest first, starting below database id `id`.
    /// `pageSize` is always sent; it defaults to 25 (the node accepts 5-100).
    pub fn root_page(&self, id: Option<u64>) -> C::Output<'a> {
        self.root_page_sized(id, DEFAULT_PAGE_SIZE)
    }

    pub fn root_page_sized(&self, id: Option<u64>, page_size: u32) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::NAMESPACE_ROOT_PAGE)
                .opt_param("id", id)
                .param("pageSize", page_size),
        )
    }

    /// The namespace with the given fully-qualified name.
    pub fn namespace(&self, namespace: &str) -> C::Output<'a> {
        self.client
            .call(Call::route(&routes::NAMESPACE).param("namespace", namespace))
    }

    /// Mosaic definitions under `namespace`. Note the node spells this
    /// route's size parameter `pagesize`, unlike `root/page`.
    pub fn mosaic_definition_page(&self, namespace: &str, id: Option<u64>) -> C::Output<'a> {
        self.mosaic_definition_page_sized(namespace, id, DEFAULT_PAGE_SIZE)
    }

    pub fn mosaic_definition_page_sized(
        &self,
        namespace: &str,
        id: Option<u64>,
        page_size: u32,
    ) -> C::Output<'a> {
        self.client.call(
            Call::route(&routes::NAMESPACE_MOSAIC_DEFINITION_PAGE)
                .param("namespace", namespace)
                .opt_param("id", id)
                .param("pagesize", page_size),
        )
    }
}
