//! Render functions for every registered template
//!
//! Each function is pure: the same context always yields the same text.
//! Bodies are plain string accumulation; no template engine is involved.

use crate::context::{TemplateContext, TplCategory};
use crate::error::Result;
use crate::mapping::HtmlControl;
use crate::options::QueryType;
use crate::schema::ColumnMetadata;

/// Shared file header for generated TypeScript sources
fn ts_header(ctx: &TemplateContext) -> String {
    format!(
        "/**\n * {} - generated scaffold\n * @author {}\n */\n",
        ctx.function_name, ctx.author
    )
}

fn ts_field(col: &ColumnMetadata, indent: &str) -> String {
    let mut out = String::new();
    if let Some(comment) = &col.comment {
        if !comment.is_empty() {
            out.push_str(&format!("{}/** {} */\n", indent, comment));
        }
    }
    let optional = if col.nullable { "?" } else { "" };
    out.push_str(&format!(
        "{}{}{}: {};\n",
        indent,
        col.field_name,
        optional,
        col.language_type.as_str()
    ));
    out
}

pub(super) fn render_entity(ctx: &TemplateContext) -> Result<String> {
    let mut code = ts_header(ctx);
    code.push_str(&format!("export class {}Entity {{\n", ctx.class_name));
    for col in &ctx.table.columns {
        code.push_str(&ts_field(col, "  "));
    }
    code.push_str("}\n");

    if let TplCategory::Sub(sub) = &ctx.category {
        code.push('\n');
        code.push_str(&format!("export class {}Entity {{\n", sub.class_name));
        for col in &sub.table.columns {
            code.push_str(&ts_field(col, "  "));
        }
        code.push_str("}\n");
    }
    Ok(code)
}

pub(super) fn render_dto(ctx: &TemplateContext) -> Result<String> {
    let mut code = ts_header(ctx);

    code.push_str(&format!("export class Create{}Dto {{\n", ctx.class_name));
    for col in &ctx.columns.insert {
        code.push_str(&ts_field(col, "  "));
    }
    code.push_str("}\n\n");

    code.push_str(&format!("export class Update{}Dto {{\n", ctx.class_name));
    if let Some(pk) = ctx.pk() {
        code.push_str(&ts_field(pk, "  "));
    }
    for col in &ctx.columns.edit {
        code.push_str(&ts_field(col, "  "));
    }
    code.push_str("}\n\n");

    code.push_str(&format!("export class Query{}Dto {{\n", ctx.class_name));
    if ctx.options.enable_pagination {
        code.push_str("  page?: number;\n");
        code.push_str("  size?: number;\n");
    }
    for field in &ctx.columns.query {
        let col = &field.column;
        match field.op {
            QueryType::Between => {
                code.push_str(&format!(
                    "  {}Start?: {};\n  {}End?: {};\n",
                    col.field_name,
                    col.language_type.as_str(),
                    col.field_name,
                    col.language_type.as_str()
                ));
            }
            QueryType::In => {
                code.push_str(&format!(
                    "  {}?: {}[];\n",
                    col.field_name,
                    col.language_type.as_str()
                ));
            }
            _ => {
                code.push_str(&format!(
                    "  {}?: {};\n",
                    col.field_name,
                    col.language_type.as_str()
                ));
            }
        }
    }
    code.push_str("}\n");
    Ok(code)
}

pub(super) fn render_service(ctx: &TemplateContext) -> Result<String> {
    let mut code = ts_header(ctx);
    code.push_str(&format!(
        "import {{ {0}Entity }} from '../entity/{1}.entity';\n",
        ctx.class_name, ctx.kebab_name
    ));
    code.push_str(&format!(
        "import {{ Create{0}Dto, Update{0}Dto, Query{0}Dto }} from '../dto/{1}.dto';\n\n",
        ctx.class_name, ctx.kebab_name
    ));

    code.push_str(&format!("export class {}Service {{\n", ctx.class_name));

    // List query with the classified filter conditions
    code.push_str(&format!(
        "  async page(query: Query{}Dto) {{\n",
        ctx.class_name
    ));
    code.push_str(&format!(
        "    const qb = this.repo.createQueryBuilder('{}');\n",
        ctx.var_name
    ));
    for field in &ctx.columns.query {
        let col = &field.column;
        let clause = match field.op {
            QueryType::Like => format!(
                "qb.andWhere('{0} LIKE :{1}', {{ {1}: `%${{query.{1}}}%` }});",
                col.name, col.field_name
            ),
            QueryType::Between => format!(
                "qb.andWhere('{0} BETWEEN :{1}Start AND :{1}End', query);",
                col.name, col.field_name
            ),
            QueryType::In => format!(
                "qb.andWhere('{0} IN (:...{1})', {{ {1}: query.{1} }});",
                col.name, col.field_name
            ),
            op => format!(
                "qb.andWhere('{0} {1} :{2}', {{ {2}: query.{2} }});",
                col.name,
                sql_operator(op),
                col.field_name
            ),
        };
        code.push_str(&format!(
            "    if (query.{} !== undefined) {}\n",
            if field.op == QueryType::Between {
                format!("{}Start", col.field_name)
            } else {
                col.field_name.clone()
            },
            clause
        ));
    }
    if ctx.options.enable_data_scope {
        let scope_col = ctx
            .options
            .data_scope_column
            .as_deref()
            .unwrap_or("dept_id");
        code.push_str(&format!(
            "    this.applyDataScope(qb, '{}', '{}');\n",
            scope_col,
            ctx.options.data_scope_type.as_str()
        ));
    }
    if let Some(tenant) = &ctx.options.tenant_column {
        code.push_str(&format!(
            "    qb.andWhere('{} = :tenantId', {{ tenantId: this.ctx.tenantId }});\n",
            tenant
        ));
    }
    if let TplCategory::Tree(tree) = &ctx.category {
        code.push_str(&format!(
            "    qb.orderBy('{}', 'ASC').addOrderBy('{}', 'ASC');\n",
            tree.parent_code, tree.code
        ));
    }
    if ctx.options.enable_pagination {
        code.push_str("    qb.skip(((query.page ?? 1) - 1) * (query.size ?? 20)).take(query.size ?? 20);\n");
    }
    code.push_str("    return qb.getManyAndCount();\n");
    code.push_str("  }\n\n");

    code.push_str(&format!(
        "  async add(dto: Create{}Dto) {{\n    return this.repo.save(dto);\n  }}\n\n",
        ctx.class_name
    ));
    code.push_str(&format!(
        "  async update(dto: Update{}Dto) {{\n",
        ctx.class_name
    ));
    if let Some(pk) = ctx.pk() {
        code.push_str(&format!(
            "    return this.repo.update(dto.{}, dto);\n",
            pk.field_name
        ));
    } else {
        code.push_str("    return this.repo.save(dto);\n");
    }
    code.push_str("  }\n\n");
    if let Some(pk) = ctx.pk() {
        code.push_str(&format!(
            "  async info({0}: {1}) {{\n    return this.repo.findOneBy({{ {0} }});\n  }}\n\n",
            pk.field_name,
            pk.language_type.as_str()
        ));
    }
    code.push_str("  async delete(ids: number[]) {\n");
    if let TplCategory::Sub(sub) = &ctx.category {
        code.push_str(&format!(
            "    await this.{}Repo.delete({{ {}: In(ids) }});\n",
            sub.var_name, sub.fk_column.field_name
        ));
    }
    code.push_str("    return this.repo.delete(ids);\n");
    code.push_str("  }\n");

    if ctx.options.enable_audit_log {
        code.push('\n');
        code.push_str(&format!(
            "  protected auditTag = '{}:{}';\n",
            ctx.module_name, ctx.kebab_name
        ));
    }

    code.push_str("}\n");
    Ok(code)
}

fn sql_operator(op: QueryType) -> &'static str {
    match op {
        QueryType::Eq => "=",
        QueryType::Ne => "<>",
        QueryType::Gt => ">",
        QueryType::Gte => ">=",
        QueryType::Lt => "<",
        QueryType::Lte => "<=",
        QueryType::Like => "LIKE",
        QueryType::Between => "BETWEEN",
        QueryType::In => "IN",
    }
}

pub(super) fn render_controller(ctx: &TemplateContext) -> Result<String> {
    let route = format!("{}/{}/{}", ctx.api_prefix, ctx.module_name, ctx.kebab_name);
    let mut code = ts_header(ctx);
    code.push_str(&format!(
        "import {{ {0}Service }} from '../service/{1}.service';\n\n",
        ctx.class_name, ctx.kebab_name
    ));
    code.push_str(&format!("@Controller('{}')\n", route));
    code.push_str(&format!("export class {}Controller {{\n", ctx.class_name));
    code.push_str(&format!(
        "  constructor(private readonly service: {}Service) {{}}\n\n",
        ctx.class_name
    ));
    code.push_str("  @Post('page')\n  page(@Body() query) {\n    return this.service.page(query);\n  }\n\n");
    code.push_str("  @Post('add')\n  add(@Body() dto) {\n    return this.service.add(dto);\n  }\n\n");
    code.push_str("  @Post('update')\n  update(@Body() dto) {\n    return this.service.update(dto);\n  }\n\n");
    code.push_str("  @Post('delete')\n  delete(@Body('ids') ids: number[]) {\n    return this.service.delete(ids);\n  }\n");
    if let Some(pk) = ctx.pk() {
        code.push_str(&format!(
            "\n  @Get('info')\n  info(@Query('{0}') {0}) {{\n    return this.service.info({0});\n  }}\n",
            pk.field_name
        ));
    }
    if ctx.options.enable_export {
        let file_name = ctx
            .options
            .export_file_name
            .clone()
            .unwrap_or_else(|| format!("{}.xlsx", ctx.kebab_name));
        code.push_str(&format!(
            "\n  @Post('export')\n  export(@Body() query) {{\n    return this.service.export(query, '{}');\n  }}\n",
            file_name
        ));
    }
    if ctx.options.enable_import {
        code.push_str(
            "\n  @Post('import')\n  import(@UploadedFile() file) {\n    return this.service.import(file);\n  }\n",
        );
    }
    code.push_str("}\n");
    Ok(code)
}

pub(super) fn render_module(ctx: &TemplateContext) -> Result<String> {
    let mut code = ts_header(ctx);
    code.push_str(&format!(
        "import {{ {0}Controller }} from './controller/{1}.controller';\n",
        ctx.class_name, ctx.kebab_name
    ));
    code.push_str(&format!(
        "import {{ {0}Service }} from './service/{1}.service';\n",
        ctx.class_name, ctx.kebab_name
    ));
    code.push_str(&format!(
        "import {{ {0}Entity }} from './entity/{1}.entity';\n\n",
        ctx.class_name, ctx.kebab_name
    ));
    code.push_str("@Module({\n");
    code.push_str(&format!(
        "  imports: [TypeOrmModule.forFeature([{}Entity])],\n",
        ctx.class_name
    ));
    code.push_str(&format!("  controllers: [{}Controller],\n", ctx.class_name));
    code.push_str(&format!("  providers: [{}Service],\n", ctx.class_name));
    code.push_str("})\n");
    code.push_str(&format!("export class {}Module {{}}\n", ctx.class_name));
    Ok(code)
}

pub(super) fn render_api(ctx: &TemplateContext) -> Result<String> {
    let route = format!("{}/{}/{}", ctx.api_prefix, ctx.module_name, ctx.kebab_name);
    let mut code = ts_header(ctx);
    code.push_str("import { request } from '@/utils/request';\n\n");
    for (name, method) in [
        ("page", "post"),
        ("add", "post"),
        ("update", "post"),
        ("delete", "post"),
    ] {
        code.push_str(&format!(
            "export function {0}{1}(data?: object) {{\n  return request.{2}('{3}/{0}', data);\n}}\n\n",
            name, ctx.class_name, method, route
        ));
    }
    if ctx.pk().is_some() {
        code.push_str(&format!(
            "export function info{0}(params: object) {{\n  return request.get('{1}/info', {{ params }});\n}}\n",
            ctx.class_name, route
        ));
    }
    Ok(code)
}

fn query_form_items(ctx: &TemplateContext) -> String {
    let mut out = String::new();
    for field in &ctx.columns.query {
        let col = &field.column;
        out.push_str(&format!(
            "      <el-form-item label=\"{}\" prop=\"{}\">\n",
            col.label(),
            col.field_name
        ));
        if col.is_dict() {
            out.push_str(&format!(
                "        <dict-select v-model=\"query.{}\" type=\"{}\" />\n",
                col.field_name,
                col.dict_type.as_deref().unwrap_or_default()
            ));
        } else {
            out.push_str(&format!(
                "        <el-input v-model=\"query.{}\" clearable />\n",
                col.field_name
            ));
        }
        out.push_str("      </el-form-item>\n");
    }
    out
}

fn table_columns(ctx: &TemplateContext, columns: &[ColumnMetadata]) -> String {
    let mut out = String::new();
    if ctx.options.show_index_column {
        out.push_str("      <el-table-column type=\"index\" width=\"60\" />\n");
    }
    for col in columns {
        if col.is_dict() {
            out.push_str(&format!(
                "      <el-table-column label=\"{}\" prop=\"{}\">\n        <template #default=\"{{ row }}\">\n          <dict-tag type=\"{}\" :value=\"row.{}\" />\n        </template>\n      </el-table-column>\n",
                col.label(),
                col.field_name,
                col.dict_type.as_deref().unwrap_or_default(),
                col.field_name
            ));
        } else {
            out.push_str(&format!(
                "      <el-table-column label=\"{}\" prop=\"{}\" />\n",
                col.label(),
                col.field_name
            ));
        }
    }
    out
}

pub(super) fn render_list_view(ctx: &TemplateContext) -> Result<String> {
    let mut code = String::new();
    code.push_str("<template>\n  <div class=\"page\">\n");
    code.push_str(&format!(
        "    <el-form :model=\"query\" inline :class=\"{{ collapsed: {} }}\">\n",
        !ctx.options.search_expanded
    ));
    code.push_str(&query_form_items(ctx));
    code.push_str("    </el-form>\n");
    code.push_str(&format!(
        "    <el-table :data=\"rows\"{}>\n",
        if ctx.options.table_fixed_header {
            " height=\"100%\""
        } else {
            ""
        }
    ));
    code.push_str(&table_columns(ctx, &ctx.columns.list));
    code.push_str("    </el-table>\n");
    if ctx.options.enable_pagination {
        code.push_str("    <el-pagination v-model:current-page=\"query.page\" v-model:page-size=\"query.size\" :total=\"total\" />\n");
    }
    code.push_str("  </div>\n</template>\n\n");
    code.push_str(&format!(
        "<script setup lang=\"ts\">\nimport {{ page{0} }} from '@/api/{1}/{2}';\n</script>\n",
        ctx.class_name, ctx.module_name, ctx.kebab_name
    ));
    Ok(code)
}

pub(super) fn render_tree_view(ctx: &TemplateContext) -> Result<String> {
    let tree = match &ctx.category {
        TplCategory::Tree(tree) => tree,
        other => {
            return Err(crate::error::GenError::TemplateRender {
                template: "tree-view",
                message: format!("expected tree variant, got {}", other.as_str()),
            })
        }
    };
    let mut code = String::new();
    code.push_str("<template>\n  <div class=\"page\">\n");
    code.push_str(&query_form_items(ctx));
    code.push_str(&format!(
        "    <el-table :data=\"tree\" row-key=\"{}\" :tree-props=\"{{ children: 'children' }}\" default-expand-all>\n",
        ctx.pk_field().unwrap_or(&tree.code)
    ));
    code.push_str(&table_columns(ctx, &ctx.columns.list));
    code.push_str("    </el-table>\n");
    code.push_str("  </div>\n</template>\n\n");
    code.push_str(&format!(
        "<script setup lang=\"ts\">\nimport {{ page{0} }} from '@/api/{1}/{2}';\n\nconst codeField = '{3}';\nconst parentField = '{4}';\n</script>\n",
        ctx.class_name, ctx.module_name, ctx.kebab_name, tree.code, tree.parent_code
    ));
    Ok(code)
}

fn form_control(col: &ColumnMetadata) -> String {
    let model = format!("v-model=\"form.{}\"", col.field_name);
    match col.html_control {
        HtmlControl::Input => format!("<el-input {} />", model),
        HtmlControl::Textarea => format!("<el-input {} type=\"textarea\" />", model),
        HtmlControl::Number => format!("<el-input-number {} />", model),
        HtmlControl::Radio => format!(
            "<el-radio-group {0}><el-radio :value=\"true\">Yes</el-radio><el-radio :value=\"false\">No</el-radio></el-radio-group>",
            model
        ),
        HtmlControl::Select => format!(
            "<dict-select {} type=\"{}\" />",
            model,
            col.dict_type.as_deref().unwrap_or_default()
        ),
        HtmlControl::Datetime => format!("<el-date-picker {} type=\"datetime\" />", model),
        HtmlControl::Date => format!("<el-date-picker {} type=\"date\" />", model),
    }
}

pub(super) fn render_form_dialog(ctx: &TemplateContext) -> Result<String> {
    let width = ctx.options.dialog_width.as_deref().unwrap_or("600px");
    let mut code = String::new();
    code.push_str("<template>\n");
    code.push_str(&format!(
        "  <el-dialog v-model=\"visible\" :title=\"title\" width=\"{}\">\n",
        width
    ));
    code.push_str("    <el-form :model=\"form\" :rules=\"rules\" label-width=\"110px\">\n");
    for col in &ctx.columns.form {
        code.push_str(&format!(
            "      <el-form-item label=\"{}\" prop=\"{}\">\n        {}\n      </el-form-item>\n",
            col.label(),
            col.field_name,
            form_control(col)
        ));
    }
    code.push_str("    </el-form>\n  </el-dialog>\n</template>\n\n");
    code.push_str("<script setup lang=\"ts\">\nconst rules = {\n");
    for col in ctx.columns.form.iter().filter(|c| c.required) {
        code.push_str(&format!(
            "  {}: [{{ required: true, message: '{} is required' }}],\n",
            col.field_name,
            col.label()
        ));
    }
    code.push_str("};\n</script>\n");
    Ok(code)
}

pub(super) fn render_sub_table(ctx: &TemplateContext) -> Result<String> {
    let sub = match &ctx.category {
        TplCategory::Sub(sub) => sub,
        other => {
            return Err(crate::error::GenError::TemplateRender {
                template: "sub-table",
                message: format!("expected sub variant, got {}", other.as_str()),
            })
        }
    };
    let mut code = String::new();
    code.push_str("<template>\n");
    code.push_str(&format!(
        "  <el-table :data=\"rows\" v-if=\"parent.{}\">\n",
        ctx.pk_field().unwrap_or(&sub.fk_column.field_name)
    ));
    code.push_str(&table_columns(ctx, &sub.columns.list));
    code.push_str("  </el-table>\n</template>\n\n");
    code.push_str(&format!(
        "<script setup lang=\"ts\">\n// Rows are filtered by {}.{} = parent key\nconst fkField = '{}';\n</script>\n",
        sub.table.name, sub.fk_column.name, sub.fk_column.field_name
    ));
    Ok(code)
}

pub(super) fn render_menu_sql(ctx: &TemplateContext) -> Result<String> {
    let route = format!("/{}/{}", ctx.module_name, ctx.kebab_name);
    let parent = ctx
        .options
        .parent_menu_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "0".to_string());
    let perm_base = format!("{}:{}", ctx.module_name, ctx.var_name);

    let mut sql = format!(
        "-- Menu registration for {} ({})\n",
        ctx.function_name, ctx.table.name
    );
    sql.push_str(&format!(
        "INSERT INTO sys_menu (parent_id, name, router, perms, type, order_num)\nVALUES ({}, '{}', '{}', NULL, 1, 0);\n\n",
        parent, ctx.function_name, route
    ));
    for (label, action) in [
        ("List", "page"),
        ("Add", "add"),
        ("Update", "update"),
        ("Delete", "delete"),
    ] {
        sql.push_str(&format!(
            "INSERT INTO sys_menu (parent_id, name, router, perms, type, order_num)\nVALUES (LAST_INSERT_ID(), '{} {}', NULL, '{}:{}', 2, 0);\n",
            label, ctx.function_name, perm_base, action
        ));
    }
    if ctx.options.enable_export {
        sql.push_str(&format!(
            "INSERT INTO sys_menu (parent_id, name, router, perms, type, order_num)\nVALUES (LAST_INSERT_ID(), 'Export {}', NULL, '{}:export', 2, 0);\n",
            ctx.function_name, perm_base
        ));
    }
    if ctx.options.enable_import {
        sql.push_str(&format!(
            "INSERT INTO sys_menu (parent_id, name, router, perms, type, order_num)\nVALUES (LAST_INSERT_ID(), 'Import {}', NULL, '{}:import', 2, 0);\n",
            ctx.function_name, perm_base
        ));
    }
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::config::GeneratorConfig;
    use crate::context::build_context;
    use crate::options::GenOptions;
    use crate::schema::TableMetadata;
    use std::collections::HashMap;

    fn column(name: &str, native: &str, pk: bool) -> ColumnMetadata {
        let (language_type, html_control) = crate::mapping::map_type(native);
        ColumnMetadata {
            name: name.to_string(),
            field_name: heck::AsLowerCamelCase(name).to_string(),
            comment: None,
            native_type: native.to_string(),
            language_type,
            html_control,
            dict_type: None,
            nullable: !pk,
            is_primary_key: pk,
            is_auto_increment: pk,
            default_value: None,
            max_length: None,
            sort_order: 0,
            required: pk,
        }
    }

    fn post_context(options: GenOptions) -> TemplateContext {
        let table = TableMetadata {
            name: "sys_post".to_string(),
            comment: Some("Post".to_string()),
            create_time: None,
            update_time: None,
            columns: vec![
                column("post_id", "int4", true),
                column("post_code", "varchar", false),
                column("post_name", "varchar", false),
            ],
        };
        let classified = classify(&table, &options, &HashMap::new());
        build_context(
            table,
            classified,
            options,
            HashMap::new(),
            &GeneratorConfig::default(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_entity_contains_all_columns() {
        let code = render_entity(&post_context(GenOptions::default())).unwrap();
        assert!(code.contains("export class PostEntity {"));
        assert!(code.contains("postId: number;"));
        assert!(code.contains("postCode?: string;"));
    }

    #[test]
    fn test_dto_update_includes_pk() {
        let code = render_dto(&post_context(GenOptions::default())).unwrap();
        assert!(code.contains("export class UpdatePostDto {"));
        assert!(code.contains("postId: number;"));
        // Create DTO never carries the auto-increment key
        let create = code.split("UpdatePostDto").next().unwrap();
        assert!(!create.contains("postId"));
    }

    #[test]
    fn test_service_query_conditions() {
        let code = render_service(&post_context(GenOptions::default())).unwrap();
        assert!(code.contains("post_name LIKE :postName"));
        assert!(code.contains("async page(query: QueryPostDto)"));
    }

    #[test]
    fn test_controller_export_toggle() {
        let plain = render_controller(&post_context(GenOptions::default())).unwrap();
        assert!(!plain.contains("@Post('export')"));

        let options = GenOptions {
            enable_export: true,
            ..Default::default()
        };
        let with_export = render_controller(&post_context(options)).unwrap();
        assert!(with_export.contains("@Post('export')"));
        assert!(with_export.contains("post.xlsx"));
    }

    #[test]
    fn test_controller_route_uses_api_prefix() {
        let options = GenOptions {
            api_prefix: Some("/admin".to_string()),
            ..Default::default()
        };
        let code = render_controller(&post_context(options)).unwrap();
        assert!(code.contains("@Controller('/admin/system/post')"));
    }

    #[test]
    fn test_menu_sql_parent_and_permissions() {
        let options = GenOptions {
            parent_menu_id: Some(42),
            ..Default::default()
        };
        let sql = render_menu_sql(&post_context(options)).unwrap();
        assert!(sql.contains("VALUES (42, 'Post', '/system/post'"));
        assert!(sql.contains("'system:post:delete'"));
    }

    #[test]
    fn test_list_view_pagination_toggle() {
        let with = render_list_view(&post_context(GenOptions::default())).unwrap();
        assert!(with.contains("el-pagination"));

        let options = GenOptions {
            enable_pagination: false,
            ..Default::default()
        };
        let without = render_list_view(&post_context(options)).unwrap();
        assert!(!without.contains("el-pagination"));
    }

    #[test]
    fn test_form_dialog_required_rules() {
        let mut ctx = post_context(GenOptions::default());
        ctx.columns.form[0].required = true;
        let code = render_form_dialog(&ctx).unwrap();
        assert!(code.contains("postCode: [{ required: true"));
    }

    #[test]
    fn test_tree_view_rejects_non_tree_context() {
        let err = render_tree_view(&post_context(GenOptions::default())).unwrap_err();
        assert!(matches!(
            err,
            crate::error::GenError::TemplateRender { template: "tree-view", .. }
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let ctx = post_context(GenOptions::default());
        assert_eq!(
            render_service(&ctx).unwrap(),
            render_service(&ctx).unwrap()
        );
        assert_eq!(
            render_list_view(&ctx).unwrap(),
            render_list_view(&ctx).unwrap()
        );
    }
}
