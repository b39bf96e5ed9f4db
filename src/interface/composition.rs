//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::post_findings::PostFindingsUseCase;
use crate::application::usecases::show_diff::ShowDiffUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, GatewayFactoryAdapter, JsonConfigRepository, UrlTargetResolver,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    target_resolver: UrlTargetResolver,
    gateway_factory: GatewayFactoryAdapter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            target_resolver: UrlTargetResolver,
            gateway_factory: GatewayFactoryAdapter,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 코멘트 게시 유스케이스를 생성한다.
    pub fn post_findings_usecase(&self) -> PostFindingsUseCase<'_> {
        PostFindingsUseCase {
            config_repo: &self.config_repo,
            target_resolver: &self.target_resolver,
            gateway_factory: &self.gateway_factory,
            reporter: &self.reporter,
        }
    }

    /// diff 출력 유스케이스를 생성한다.
    pub fn show_diff_usecase(&self) -> ShowDiffUseCase<'_> {
        ShowDiffUseCase {
            config_repo: &self.config_repo,
            target_resolver: &self.target_resolver,
            gateway_factory: &self.gateway_factory,
            reporter: &self.reporter,
        }
    }
}
