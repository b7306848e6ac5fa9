use prcomment_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use prcomment_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub core_module: CoreModule,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                core_module: &self.core_module,
                api_service: &self.api_service,
            }
        }
    }
}
