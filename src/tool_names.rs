//! Tool names as declared in `tools.yaml`.

// Alerting
pub const LIST_ALERTS: &str = "listAlerts";
pub const LIST_ALERT_RULES: &str = "listAlertRules";
pub const GET_ALERT_RULE: &str = "getAlertRule";
pub const UPDATE_ALERT_RULE: &str = "updateAlertRule";
pub const DELETE_ALERT_RULE: &str = "deleteAlertRule";
pub const GET_ALERTING_SETTINGS: &str = "getAlertingSettings";
pub const CREATE_ALERT_SILENCE: &str = "createAlertSilence";
pub const DELETE_ALERT_SILENCE: &str = "deleteAlertSilence";

// Docker stacks
pub const LIST_DOCKER_STACKS: &str = "listDockerStacks";
pub const GET_DOCKER_STACK_FILE: &str = "getDockerStackFile";
pub const CREATE_DOCKER_STACK: &str = "createDockerStack";
pub const UPDATE_DOCKER_STACK: &str = "updateDockerStack";
pub const DELETE_DOCKER_STACK: &str = "deleteDockerStack";
pub const START_DOCKER_STACK: &str = "startDockerStack";
pub const STOP_DOCKER_STACK: &str = "stopDockerStack";

// Edge jobs
pub const LIST_EDGE_JOBS: &str = "listEdgeJobs";
pub const GET_EDGE_JOB: &str = "getEdgeJob";
pub const CREATE_EDGE_JOB: &str = "createEdgeJob";
pub const DELETE_EDGE_JOB: &str = "deleteEdgeJob";

// Policies
pub const LIST_POLICIES: &str = "listPolicies";
pub const GET_POLICY: &str = "getPolicy";
pub const CREATE_POLICY: &str = "createPolicy";
pub const UPDATE_POLICY: &str = "updatePolicy";
pub const DELETE_POLICY: &str = "deletePolicy";
pub const LIST_POLICY_TEMPLATES: &str = "listPolicyTemplates";
pub const GET_POLICY_TEMPLATE: &str = "getPolicyTemplate";
pub const GET_POLICY_METADATA: &str = "getPolicyMetadata";
pub const GET_POLICY_CONFLICTS: &str = "getPolicyConflicts";

// Git credentials
pub const LIST_GIT_CREDENTIALS: &str = "listGitCredentials";
pub const GET_GIT_CREDENTIAL: &str = "getGitCredential";
pub const CREATE_GIT_CREDENTIAL: &str = "createGitCredential";
pub const UPDATE_GIT_CREDENTIAL: &str = "updateGitCredential";
pub const DELETE_GIT_CREDENTIAL: &str = "deleteGitCredential";

// Custom templates
pub const LIST_CUSTOM_TEMPLATES: &str = "listCustomTemplates";
pub const CREATE_CUSTOM_TEMPLATE: &str = "createCustomTemplate";
pub const DELETE_CUSTOM_TEMPLATE: &str = "deleteCustomTemplate";

// Settings
pub const GET_SETTINGS: &str = "getSettings";
pub const UPDATE_SETTINGS: &str = "updateSettings";

// Registries
pub const LIST_REGISTRIES: &str = "listRegistries";
pub const CREATE_REGISTRY: &str = "createRegistry";
pub const DELETE_REGISTRY: &str = "deleteRegistry";
pub const TEST_REGISTRY_CONNECTION: &str = "testRegistryConnection";

// Kubernetes custom resources
pub const LIST_CUSTOM_RESOURCE_DEFINITIONS: &str = "listCustomResourceDefinitions";
pub const GET_CUSTOM_RESOURCE_DEFINITION: &str = "getCustomResourceDefinition";
pub const DELETE_CUSTOM_RESOURCE_DEFINITION: &str = "deleteCustomResourceDefinition";
pub const LIST_CUSTOM_RESOURCES: &str = "listCustomResources";
pub const GET_CUSTOM_RESOURCE: &str = "getCustomResource";
pub const DELETE_CUSTOM_RESOURCE: &str = "deleteCustomResource";

// Webhooks
pub const LIST_WEBHOOKS: &str = "listWebhooks";
pub const CREATE_WEBHOOK: &str = "createWebhook";
pub const DELETE_WEBHOOK: &str = "deleteWebhook";

// Environments
pub const UPDATE_ENVIRONMENT: &str = "updateEnvironment";
pub const LIST_AGENT_VERSIONS: &str = "listAgentVersions";

/// Every tool this server knows how to handle.
pub const ALL_TOOLS: &[&str] = &[
    LIST_ALERTS,
    LIST_ALERT_RULES,
    GET_ALERT_RULE,
    UPDATE_ALERT_RULE,
    DELETE_ALERT_RULE,
    GET_ALERTING_SETTINGS,
    CREATE_ALERT_SILENCE,
    DELETE_ALERT_SILENCE,
    LIST_DOCKER_STACKS,
    GET_DOCKER_STACK_FILE,
    CREATE_DOCKER_STACK,
    UPDATE_DOCKER_STACK,
    DELETE_DOCKER_STACK,
    START_DOCKER_STACK,
    STOP_DOCKER_STACK,
    LIST_EDGE_JOBS,
    GET_EDGE_JOB,
    CREATE_EDGE_JOB,
    DELETE_EDGE_JOB,
    LIST_POLICIES,
    GET_POLICY,
    CREATE_POLICY,
    UPDATE_POLICY,
    DELETE_POLICY,
    LIST_POLICY_TEMPLATES,
    GET_POLICY_TEMPLATE,
    GET_POLICY_METADATA,
    GET_POLICY_CONFLICTS,
    LIST_GIT_CREDENTIALS,
    GET_GIT_CREDENTIAL,
    CREATE_GIT_CREDENTIAL,
    UPDATE_GIT_CREDENTIAL,
    DELETE_GIT_CREDENTIAL,
    LIST_CUSTOM_TEMPLATES,
    CREATE_CUSTOM_TEMPLATE,
    DELETE_CUSTOM_TEMPLATE,
    GET_SETTINGS,
    UPDATE_SETTINGS,
    LIST_REGISTRIES,
    CREATE_REGISTRY,
    DELETE_REGISTRY,
    TEST_REGISTRY_CONNECTION,
    LIST_CUSTOM_RESOURCE_DEFINITIONS,
    GET_CUSTOM_RESOURCE_DEFINITION,
    DELETE_CUSTOM_RESOURCE_DEFINITION,
    LIST_CUSTOM_RESOURCES,
    GET_CUSTOM_RESOURCE,
    DELETE_CUSTOM_RESOURCE,
    LIST_WEBHOOKS,
    CREATE_WEBHOOK,
    DELETE_WEBHOOK,
    UPDATE_ENVIRONMENT,
    LIST_AGENT_VERSIONS,
];
