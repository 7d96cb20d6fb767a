//! Simplified-Chinese labels.
//!
//! Region names cover every province-level division plus the prefecture and
//! county codes most commonly seen on issued cards; codes not listed here
//! simply miss on lookup.

use super::LocaleData;

pub(crate) static ZH_CN: LocaleData = LocaleData {
    regions: &[
        // 11 北京
        ("110000", "北京市"),
        ("110100", "市辖区"),
        ("110101", "东城区"),
        ("110102", "西城区"),
        ("110105", "朝阳区"),
        ("110106", "丰台区"),
        ("110107", "石景山区"),
        ("110108", "海淀区"),
        ("110112", "通州区"),
        ("110114", "昌平区"),
        // 12 天津
        ("120000", "天津市"),
        ("120100", "市辖区"),
        ("120101", "和平区"),
        ("120102", "河东区"),
        ("120103", "河西区"),
        ("120104", "南开区"),
        ("120110", "东丽区"),
        // 13 河北
        ("130000", "河北省"),
        ("130100", "石家庄市"),
        ("130102", "长安区"),
        ("130104", "桥西区"),
        ("130200", "唐山市"),
        ("130300", "秦皇岛市"),
        ("130600", "保定市"),
        // 14 山西
        ("140000", "山西省"),
        ("140100", "太原市"),
        ("140105", "小店区"),
        ("140200", "大同市"),
        // 15 内蒙古
        ("150000", "内蒙古自治区"),
        ("150100", "呼和浩特市"),
        ("150200", "包头市"),
        // 21 辽宁
        ("210000", "辽宁省"),
        ("210100", "沈阳市"),
        ("210102", "和平区"),
        ("210103", "沈河区"),
        ("210200", "大连市"),
        ("210202", "中山区"),
        ("210204", "沙河口区"),
        // 22 吉林
        ("220000", "吉林省"),
        ("220100", "长春市"),
        ("220200", "吉林市"),
        // 23 黑龙江
        ("230000", "黑龙江省"),
        ("230100", "哈尔滨市"),
        ("230102", "道里区"),
        ("230103", "南岗区"),
        ("230600", "大庆市"),
        // 31 上海
        ("310000", "上海市"),
        ("310100", "市辖区"),
        ("310101", "黄浦区"),
        ("310104", "徐汇区"),
        ("310105", "长宁区"),
        ("310107", "普陀区"),
        ("310110", "杨浦区"),
        ("310112", "闵行区"),
        ("310115", "浦东新区"),
        // 32 江苏
        ("320000", "江苏省"),
        ("320100", "南京市"),
        ("320102", "玄武区"),
        ("320104", "秦淮区"),
        ("320106", "鼓楼区"),
        ("320111", "浦口区"),
        ("320115", "江宁区"),
        ("320200", "无锡市"),
        ("320500", "苏州市"),
        ("320502", "虎丘区"),
        ("320505", "吴中区"),
        // 33 浙江
        ("330000", "浙江省"),
        ("330100", "杭州市"),
        ("330102", "上城区"),
        ("330105", "拱墅区"),
        ("330106", "西湖区"),
        ("330108", "滨江区"),
        ("330109", "萧山区"),
        ("330110", "余杭区"),
        ("330200", "宁波市"),
        ("330203", "海曙区"),
        ("330300", "温州市"),
        // 34 安徽
        ("340000", "安徽省"),
        ("340100", "合肥市"),
        ("340111", "包河区"),
        ("340200", "芜湖市"),
        // 35 福建
        ("350000", "福建省"),
        ("350100", "福州市"),
        ("350102", "鼓楼区"),
        ("350103", "台江区"),
        ("350104", "仓山区"),
        ("350105", "马尾区"),
        ("350111", "晋安区"),
        ("350112", "长乐区"),
        ("350121", "闽侯县"),
        ("350181", "福清市"),
        ("350200", "厦门市"),
        ("350203", "思明区"),
        ("350205", "海沧区"),
        ("350206", "湖里区"),
        ("350211", "集美区"),
        ("350212", "同安区"),
        ("350213", "翔安区"),
        ("350300", "莆田市"),
        ("350302", "城厢区"),
        ("350400", "三明市"),
        ("350402", "梅列区"),
        ("350500", "泉州市"),
        ("350502", "鲤城区"),
        ("350503", "丰泽区"),
        ("350504", "洛江区"),
        ("350505", "泉港区"),
        ("350521", "惠安县"),
        ("350524", "安溪县"),
        ("350525", "永春县"),
        ("350526", "德化县"),
        ("350527", "金门县"),
        ("350581", "石狮市"),
        ("350582", "晋江市"),
        ("350583", "南安市"),
        ("350600", "漳州市"),
        ("350602", "芗城区"),
        ("350700", "南平市"),
        ("350800", "龙岩市"),
        ("350802", "新罗区"),
        ("350900", "宁德市"),
        ("350902", "蕉城区"),
        // 36 江西
        ("360000", "江西省"),
        ("360100", "南昌市"),
        ("360102", "东湖区"),
        ("360700", "赣州市"),
        // 37 山东
        ("370000", "山东省"),
        ("370100", "济南市"),
        ("370102", "历下区"),
        ("370200", "青岛市"),
        ("370202", "市南区"),
        ("370203", "市北区"),
        ("370212", "崂山区"),
        ("370600", "烟台市"),
        // 41 河南
        ("410000", "河南省"),
        ("410100", "郑州市"),
        ("410102", "中原区"),
        ("410103", "二七区"),
        ("410105", "金水区"),
        ("410300", "洛阳市"),
        // 42 湖北
        ("420000", "湖北省"),
        ("420100", "武汉市"),
        ("420102", "江岸区"),
        ("420103", "江汉区"),
        ("420106", "武昌区"),
        ("420111", "洪山区"),
        ("420500", "宜昌市"),
        // 43 湖南
        ("430000", "湖南省"),
        ("430100", "长沙市"),
        ("430102", "芙蓉区"),
        ("430103", "天心区"),
        ("430104", "岳麓区"),
        ("430200", "株洲市"),
        // 44 广东
        ("440000", "广东省"),
        ("440100", "广州市"),
        ("440103", "荔湾区"),
        ("440104", "越秀区"),
        ("440105", "海珠区"),
        ("440106", "天河区"),
        ("440111", "白云区"),
        ("440113", "番禺区"),
        ("440300", "深圳市"),
        ("440303", "罗湖区"),
        ("440304", "福田区"),
        ("440305", "南山区"),
        ("440306", "宝安区"),
        ("440307", "龙岗区"),
        ("440400", "珠海市"),
        ("440600", "佛山市"),
        ("441300", "惠州市"),
        ("442000", "中山市"),
        // 45 广西
        ("450000", "广西壮族自治区"),
        ("450100", "南宁市"),
        ("450200", "柳州市"),
        ("450300", "桂林市"),
        // 46 海南
        ("460000", "海南省"),
        ("460100", "海口市"),
        ("460200", "三亚市"),
        // 50 重庆
        ("500000", "重庆市"),
        ("500100", "市辖区"),
        ("500101", "万州区"),
        ("500103", "渝中区"),
        ("500105", "江北区"),
        ("500107", "九龙坡区"),
        ("500200", "县"),
        // 51 四川
        ("510000", "四川省"),
        ("510100", "成都市"),
        ("510104", "锦江区"),
        ("510105", "青羊区"),
        ("510106", "金牛区"),
        ("510107", "武侯区"),
        ("510108", "成华区"),
        ("510700", "绵阳市"),
        // 52 贵州
        ("520000", "贵州省"),
        ("520100", "贵阳市"),
        ("520300", "遵义市"),
        // 53 云南
        ("530000", "云南省"),
        ("530100", "昆明市"),
        ("530102", "五华区"),
        ("532900", "大理白族自治州"),
        // 54 西藏
        ("540000", "西藏自治区"),
        ("540100", "拉萨市"),
        // 61 陕西
        ("610000", "陕西省"),
        ("610100", "西安市"),
        ("610102", "新城区"),
        ("610103", "碑林区"),
        ("610104", "莲湖区"),
        ("610113", "雁塔区"),
        ("610300", "宝鸡市"),
        // 62 甘肃
        ("620000", "甘肃省"),
        ("620100", "兰州市"),
        ("620102", "城关区"),
        // 63 青海
        ("630000", "青海省"),
        ("630100", "西宁市"),
        // 64 宁夏
        ("640000", "宁夏回族自治区"),
        ("640100", "银川市"),
        // 65 新疆
        ("650000", "新疆维吾尔自治区"),
        ("650100", "乌鲁木齐市"),
        ("650200", "克拉玛依市"),
        // 71/81/82 台港澳
        ("710000", "台湾省"),
        ("810000", "香港特别行政区"),
        ("820000", "澳门特别行政区"),
    ],
    gender: ["男", "女"],
    zodiac: [
        "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪", "鼠",
    ],
    constellations: [
        "水瓶座",
        "双鱼座",
        "白羊座",
        "金牛座",
        "双子座",
        "巨蟹座",
        "狮子座",
        "处女座",
        "天秤座",
        "天蝎座",
        "射手座",
        "魔羯座",
    ],
};
